#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub all: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub no_lower: bool,
    pub length: Option<String>,
    pub number: Option<usize>,
}
