use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrengthsError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown statement id in section {section}: {statement}")]
    UnknownStatement { section: String, statement: String },

    #[error("dimension {dimension} is not legal for statement {statement}")]
    IllegalDimension {
        statement: String,
        dimension: String,
    },

    #[error("toggle responses must be 0 or 1, got {0}")]
    InvalidToggleValue(u8),

    #[error("unknown category id in section {section}: {category}")]
    UnknownCategory { section: String, category: String },

    #[error("import file is not a valid export: {0}")]
    InvalidImport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StrengthsError>;
