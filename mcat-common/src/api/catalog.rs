//! Result catalog
//!
//! Fixed set of named outcome templates. Templates are `const` values: a
//! handler copies one into a fresh [`Outcome`](super::Outcome) per request
//! and never mutates the shared definition.

use super::outcome::Outcome;

/// Named outcome template: status flag, HTTP status code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Whether the operation succeeded
    pub status: bool,
    /// HTTP status code written to the response
    pub status_code: u16,
    /// Human-readable message
    pub message: &'static str,
}

impl Template {
    /// True for 2xx status codes
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }

    /// Fresh outcome with no payload
    pub fn outcome<T>(self) -> Outcome<T> {
        Outcome::from_template(self)
    }

    /// Fresh outcome carrying `data`
    pub fn with_data<T>(self, data: T) -> Outcome<T> {
        Outcome::from_template(self).data(data)
    }
}

// ========================================
// Error Templates
// ========================================

pub const REQUIRED_FIELDS_ERROR: Template = Template {
    status: false,
    status_code: 400,
    message: "Required fields are missing or exceed the allowed number of characters in the request!",
};

pub const NOT_FOUND_ERROR: Template = Template {
    status: false,
    status_code: 404,
    message: "No items were found!",
};

/// Write rejected by a uniqueness or reference constraint
pub const CONFLICT_ERROR: Template = Template {
    status: false,
    status_code: 409,
    message: "The request conflicts with existing items and could not be completed!",
};

/// Known route called with a method it does not serve
pub const METHOD_NOT_ALLOWED_ERROR: Template = Template {
    status: false,
    status_code: 405,
    message: "The requested method is not supported for this route!",
};

pub const CONTENT_TYPE_ERROR: Template = Template {
    status: false,
    status_code: 415,
    message: "The content-type sent is not supported by the service. Only JSON content is accepted!",
};

/// Shared by persistence-layer and handler-layer faults. The origin is only
/// logged, see [`Origin`](super::Origin).
pub const INTERNAL_ERROR: Template = Template {
    status: false,
    status_code: 500,
    message: "Due to an internal server error, the request could not be processed!",
};

// ========================================
// Success Templates
// ========================================

pub const FOUND: Template = Template {
    status: true,
    status_code: 200,
    message: "Items found successfully!",
};

pub const CREATED: Template = Template {
    status: true,
    status_code: 201,
    message: "Item created successfully!",
};

pub const UPDATED: Template = Template {
    status: true,
    status_code: 200,
    message: "Item updated successfully!",
};

pub const DELETED: Template = Template {
    status: true,
    status_code: 200,
    message: "Item deleted successfully!",
};

/// Every template in the catalog
pub const ALL: [Template; 10] = [
    REQUIRED_FIELDS_ERROR,
    NOT_FOUND_ERROR,
    METHOD_NOT_ALLOWED_ERROR,
    CONFLICT_ERROR,
    CONTENT_TYPE_ERROR,
    INTERNAL_ERROR,
    FOUND,
    CREATED,
    UPDATED,
    DELETED,
];
