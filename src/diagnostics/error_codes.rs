//! Stable condition code constants
//!
//! Validators match on these instead of string literals, e.g. to treat
//! [`errors::NOT_VOSI_TABLES`] specially.

/// Recoverable schema non-conformance (Wxx)
pub mod warnings {
    pub const INVALID_URI: &str = "W01";
    pub const INVALID_DATATYPE: &str = "W02";
    pub const NON_POSITIVE_SIZE: &str = "W03";
    pub const UNKNOWN_FLAG: &str = "W04";
    pub const DUPLICATE_NAME: &str = "W05";
    pub const DUPLICATE_DESCRIPTION: &str = "W06";
    pub const DUPLICATE_UNIT: &str = "W07";
    pub const DUPLICATE_UCD: &str = "W08";
    pub const DUPLICATE_UTYPE: &str = "W09";
    pub const DUPLICATE_FROM_COLUMN: &str = "W10";
    pub const DUPLICATE_TARGET_COLUMN: &str = "W11";
    pub const DUPLICATE_TARGET_TABLE: &str = "W12";
    pub const DUPLICATE_TITLE: &str = "W13";
    pub const TABLESET_WITHOUT_SCHEMA: &str = "W14";
    pub const UNSUPPORTED_VERSION: &str = "W15";
    pub const TABLE_ROOT_BEFORE_1_1: &str = "W16";
    pub const DUPLICATE_QUERY_TYPE: &str = "W17";
    pub const TOO_MANY_QUERY_TYPES: &str = "W18";
    pub const WRONG_TAP_IVO_ID: &str = "W19";
    pub const TAP_WITHOUT_LANGUAGE: &str = "W20";
    pub const TAP_WITHOUT_OUTPUT_FORMAT: &str = "W21";
    pub const DUPLICATE_RETENTION_PERIOD: &str = "W22";
    pub const DUPLICATE_EXECUTION_DURATION: &str = "W23";
    pub const DUPLICATE_OUTPUT_LIMIT: &str = "W24";
    pub const DUPLICATE_UPLOAD_LIMIT: &str = "W25";
    pub const MISSING_IVO_ID: &str = "W26";
    pub const DUPLICATE_FORM: &str = "W27";
    pub const DUPLICATE_MIME: &str = "W28";
    pub const DUPLICATE_DEFAULT: &str = "W29";
    pub const DUPLICATE_HARD: &str = "W30";
    pub const INVALID_DATA_LIMIT_UNIT: &str = "W31";
    pub const DUPLICATE_AVAILABLE: &str = "W32";
    pub const DUPLICATE_UP_SINCE: &str = "W33";
    pub const DUPLICATE_DOWN_AT: &str = "W34";
    pub const DUPLICATE_BACK_AT: &str = "W35";
}

/// Fatal conditions (Exx); validation of the document stops
pub mod errors {
    pub const INVALID_ARRAYSIZE: &str = "E01";
    pub const MISSING_FROM_COLUMN: &str = "E02";
    pub const MISSING_TARGET_COLUMN: &str = "E03";
    pub const MISSING_TARGET_TABLE: &str = "E04";
    pub const MISSING_FK_COLUMN: &str = "E05";
    pub const MISSING_NAME: &str = "E06";
    pub const NOT_VOSI_TABLES: &str = "E07";
    pub const MISSING_VERSION: &str = "E08";
    pub const MISSING_FORM: &str = "E09";
}
