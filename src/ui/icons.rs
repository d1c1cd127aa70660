pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const MEMO: &str = "📝";
    pub const EMPTY: &str = "∅";
}
