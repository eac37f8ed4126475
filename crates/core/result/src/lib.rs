#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

#[cfg(feature = "rocket")]
pub mod rocket;

#[cfg(feature = "okapi")]
pub mod okapi;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub enum ErrorType {
    // ? Reporting related errors
    InvalidCategory,
    InvalidTarget,
    CannotReportYourself,

    // ? Permission errors
    Forbidden,
    NotAuthenticated,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    NotFound,
    Conflict,
    FailedValidation {
        error: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {}", self.error_type, self.location)
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| $crate::create_database_error!(stringify!($type), $collection))
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(NotFound);
        assert!(matches!(error.error_type, ErrorType::NotFound));
        assert!(error.location.contains("lib.rs"));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_error!(FailedValidation {
            error: "statuses".to_string()
        });

        assert!(matches!(
            error.error_type,
            ErrorType::FailedValidation { ref error } if error == "statuses"
        ));
    }

    #[test]
    fn use_macro_to_construct_database_error() {
        let error = create_database_error!("insert_one", "moderated_objects");
        match error.error_type {
            ErrorType::DatabaseError {
                operation,
                collection,
            } => {
                assert_eq!(operation, "insert_one");
                assert_eq!(collection, "moderated_objects");
            }
            _ => panic!("expected a database error"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_with_type_tag() {
        let error = create_error!(Forbidden);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "Forbidden");
        assert!(value["location"].is_string());
    }
}
