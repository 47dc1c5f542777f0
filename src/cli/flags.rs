#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub ascii: bool,
    pub length: Option<usize>,
    pub repeat: Option<usize>,
    pub charset: Option<String>,
}
