//! The VOSI condition catalog
//!
//! A closed, compile-time table of every warning (`W01`..`W35`) and fatal
//! condition (`E01`..`E09`) a VOSI validator can raise. Each entry pairs a
//! stable code with a positional message template, optional default
//! arguments and a documentation summary.
//!
//! The catalog renders messages only. Attaching document positions and
//! deciding whether to continue is the job of [`crate::report`].

pub mod template;

use std::fmt;

use crate::diagnostics::{Code, Severity};
use crate::error::CatalogError;

/// Empty argument list, selects a condition's defaults
pub const NO_ARGS: [&str; 0] = [];

const VODATASERVICE_1_1: &str =
    "http://www.ivoa.net/documents/VODataService/20101202/REC-VODataService-1.1-20101202.html#appA";
const VOTABLE_1_1_DIM: &str =
    "http://www.ivoa.net/Documents/VOTable/20040811/REC-VOTable-1.1-20040811.html#sec:dim";
const VOTABLE_1_2_DIM: &str =
    "http://www.ivoa.net/Documents/VOTable/20091130/REC-VOTable-1.2.html#sec:dim";
const RFC_2396: &str = "http://www.ietf.org/rfc/rfc2396.txt";

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    /// Stable code; its prefix fixes the severity
    pub code: Code,
    /// Message with positional `{}` slots
    pub template: &'static str,
    /// Substituted when the caller supplies no arguments
    pub default_args: &'static [&'static str],
    /// What rule the condition checks
    pub summary: &'static str,
    /// Governing documents
    pub references: &'static [&'static str],
}

impl Condition {
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.severity(), Severity::Fatal)
    }

    /// Fatal conditions are also invalid-value failures
    pub fn is_value_error(&self) -> bool {
        self.severity().is_value_error()
    }

    pub fn placeholder_count(&self) -> usize {
        template::placeholder_count(self.template)
    }

    /// Render the message
    ///
    /// An empty argument list selects `default_args`. Any other count must
    /// match the number of slots exactly.
    pub fn render<I>(&self, args: I) -> Result<String, CatalogError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.to_string()).collect();
        let expected = self.placeholder_count();

        if args.is_empty() && expected > 0 {
            if self.default_args.len() != expected {
                return Err(CatalogError::ArgumentCount {
                    code: self.code,
                    expected,
                    found: 0,
                });
            }
            let defaults: Vec<String> = self.default_args.iter().map(|a| a.to_string()).collect();
            return Ok(template::fill(self.template, &defaults));
        }

        if args.len() != expected {
            return Err(CatalogError::ArgumentCount {
                code: self.code,
                expected,
                found: args.len(),
            });
        }

        Ok(template::fill(self.template, &args))
    }

    /// Render with the default arguments
    pub fn render_default(&self) -> Result<String, CatalogError> {
        self.render(NO_ARGS)
    }

    /// The message as it reads with default arguments, used as a title
    pub fn short_name(&self) -> String {
        self.render_default()
            .unwrap_or_else(|_| self.template.to_string())
    }
}

macro_rules! condition {
    ($code:expr, $template:expr, [$($default:expr),*], $summary:expr, [$($reference:expr),*]) => {
        Condition {
            code: $code,
            template: $template,
            default_args: &[$($default),*],
            summary: $summary,
            references: &[$($reference),*],
        }
    };
}

macro_rules! at_most_once_in_parent {
    ($ordinal:expr, $element:literal) => {
        condition!(
            Code::warning($ordinal),
            concat!("{} element contains more than one ", $element, " element"),
            ["x"],
            concat!(
                "A `", $element, "` element can only appear once within its parent element. ",
                "According to the schema, it may only occur once."
            ),
            [VODATASERVICE_1_1]
        )
    };
}

macro_rules! at_most_once {
    ($ordinal:expr, $element:literal) => {
        condition!(
            Code::warning($ordinal),
            concat!("The ", $element, " element must not occur more than once"),
            [],
            concat!("The `", $element, "` element must not occur more than once."),
            []
        )
    };
}

static CONDITIONS: [Condition; 44] = [
    condition!(
        Code::warning(1),
        "'{}' is not a valid URI",
        ["x"],
        "The attribute must be a valid URI as defined in RFC 2396.",
        [RFC_2396]
    ),
    condition!(
        Code::warning(2),
        "'{}' is not a valid datatype according to the VOSI spec",
        ["x"],
        "The attribute must be one of the datatypes accepted by VOSI.",
        []
    ),
    condition!(
        Code::warning(3),
        "Size must be positive",
        [],
        "The attribute must be a positive integer.",
        []
    ),
    condition!(
        Code::warning(4),
        "'{}' is not a recognized flag",
        ["x"],
        "The attribute must be one of the recognized flags 'indexed', 'primary' or 'nullable'.",
        []
    ),
    at_most_once_in_parent!(5, "name"),
    at_most_once_in_parent!(6, "description"),
    at_most_once_in_parent!(7, "unit"),
    at_most_once_in_parent!(8, "ucd"),
    at_most_once_in_parent!(9, "utype"),
    at_most_once_in_parent!(10, "fromColumn"),
    at_most_once_in_parent!(11, "targetColumn"),
    at_most_once_in_parent!(12, "targetTable"),
    at_most_once_in_parent!(13, "title"),
    condition!(
        Code::warning(14),
        "tableset element must contain at least one schema element.",
        [],
        "The tableset element must contain at least one schema element.",
        [VODATASERVICE_1_1]
    ),
    condition!(
        Code::warning(15),
        "This validator is designed for VOSITables version 1.0, and 1.1, but this file is {}",
        ["x"],
        "Unknown issues may arise when reading VOSITables documents of a version other than 1.0 or 1.1.",
        []
    ),
    condition!(
        Code::warning(16),
        "The element table is not a valid root element in VOSI below v1.1",
        [],
        "A bare table element is not a valid root element before VOSI 1.1.",
        []
    ),
    condition!(
        Code::warning(17),
        "ParamHTTP element contains more than one queryType element",
        [],
        "A `queryType` element can only appear once within the ParamHTTP element. \
         According to the schema, it may only occur once.",
        [VODATASERVICE_1_1]
    ),
    condition!(
        Code::warning(18),
        "The QueryType element must not occur more than two times.",
        [],
        "The QueryType element must not occur more than two times.",
        []
    ),
    condition!(
        Code::warning(19),
        "TAP Capabilities must not have an ivo-id other than ivo://ivoa.net/std/TAP",
        [],
        "TAP capabilities must not declare an ivo-id other than ivo://ivoa.net/std/TAP.",
        []
    ),
    condition!(
        Code::warning(20),
        "TAP Capabilties must have at least one `language` element.",
        [],
        "TAP capabilities must declare at least one `language` element.",
        []
    ),
    condition!(
        Code::warning(21),
        "TAP Capabilties must have at least one outputFormat element.",
        [],
        "TAP capabilities must declare at least one `outputFormat` element.",
        []
    ),
    at_most_once!(22, "retentionPeriod"),
    at_most_once!(23, "executionDuration"),
    at_most_once!(24, "outputLimit"),
    at_most_once!(25, "uploadLimit"),
    condition!(
        Code::warning(26),
        "The ivo-id attribute is mandatory",
        [],
        "The ivo-id attribute is mandatory.",
        []
    ),
    at_most_once!(27, "form"),
    at_most_once!(28, "mime"),
    at_most_once!(29, "default"),
    at_most_once!(30, "hard"),
    condition!(
        Code::warning(31),
        "The content of the DataLimit element must be byte or row",
        [],
        "The content of the `DataLimit` element must be byte or row.",
        []
    ),
    at_most_once!(32, "available"),
    at_most_once!(33, "upSince"),
    at_most_once!(34, "downAt"),
    at_most_once!(35, "backAt"),
    condition!(
        Code::fatal(1),
        "Invalid arraysize attribute '{}'",
        ["x"],
        "The attribute must be a valid arraysize according to the VOTable standard. \
         A cell may hold a fixed (`3`) or variable (`100*`, or `*` for unbounded) number \
         of elements, and multidimensional arrays list their dimensions separated by `x` \
         with the first dimension changing fastest; only the last dimension may be \
         variable, as in `64x64x10*`.",
        [VOTABLE_1_1_DIM, VOTABLE_1_2_DIM]
    ),
    condition!(
        Code::fatal(2),
        "fkColumn element is missing a fromColumn",
        [],
        "The `fkColumn` element must have a `fromColumn`.",
        []
    ),
    condition!(
        Code::fatal(3),
        "The element is missing a targetColumn",
        [],
        "The element must have a `targetColumn`.",
        []
    ),
    condition!(
        Code::fatal(4),
        "The element is missing a targetTable",
        [],
        "The element must have a `targetTable`.",
        []
    ),
    condition!(
        Code::fatal(5),
        "The element contains no `fkColumn`",
        [],
        "The element must contain at least one `fkColumn`.",
        []
    ),
    condition!(
        Code::fatal(6),
        "The {} element must have a name element",
        ["x"],
        "The element must have a `name` element.",
        []
    ),
    condition!(
        Code::fatal(7),
        "File does not appear to be a VOSITables file",
        [],
        "Raised when the file does not appear to be XML, or the root element is \
         neither tableset nor table.",
        []
    ),
    condition!(
        Code::fatal(8),
        "The {} element must have a version element",
        ["x"],
        "The element must have a `version` element.",
        []
    ),
    condition!(
        Code::fatal(9),
        "The {} element must have a form element",
        ["x"],
        "The element must have a `form` element.",
        []
    ),
];

/// Every condition, warnings first, each class in ordinal order
pub fn all() -> &'static [Condition] {
    &CONDITIONS
}

/// Conditions of one severity, in ordinal order
pub fn by_severity(severity: Severity) -> impl Iterator<Item = &'static Condition> {
    CONDITIONS
        .iter()
        .filter(move |c| c.severity() == severity)
}

/// Codes of one severity, in ordinal order
pub fn codes(severity: Severity) -> Vec<Code> {
    by_severity(severity).map(|c| c.code).collect()
}

/// Look up a parsed code
pub fn get(code: Code) -> Option<&'static Condition> {
    CONDITIONS
        .binary_search_by_key(&code, |c| c.code)
        .ok()
        .map(|i| &CONDITIONS[i])
}

/// Look up a code string such as `"W01"`
///
/// Any string that does not name a registered condition, well-formed or
/// not, fails with [`CatalogError::UnknownCode`]. Use `str::parse::<Code>`
/// to tell a malformed code apart.
pub fn lookup(code: &str) -> Result<&'static Condition, CatalogError> {
    code.parse::<Code>().ok().and_then(get).ok_or_else(|| {
        tracing::debug!(code, "lookup of unregistered condition code");
        CatalogError::UnknownCode(code.to_string())
    })
}

/// Look up and render in one step
pub fn format<I>(code: &str, args: I) -> Result<String, CatalogError>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    lookup(code)?.render(args)
}
