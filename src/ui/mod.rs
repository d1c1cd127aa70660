pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, print_snippet, render_snippet, snippet_header, success, warn};
pub use table::snippet_table;
pub use theme::{theme, Theme};
