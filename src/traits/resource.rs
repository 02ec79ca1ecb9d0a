//! Resource trait describing an endpoint family.

use crate::context::Requirement;

/// A family of Agave endpoints rooted at one path.
///
/// # Example
///
/// ```ignore
/// use agaveapi::{Requirement, Resource};
///
/// struct Rfi;
///
/// impl Resource for Rfi {
///     const PATH: &'static str = "rfis";
///     const PROJECT_ID: Requirement = Requirement::Required;
/// }
/// ```
pub trait Resource {
    /// Path under the API base URL, without leading or trailing slashes.
    const PATH: &'static str;

    /// Whether calls for this resource need a project id.
    const PROJECT_ID: Requirement;

    /// Path of a single item, with the id encoded as one path segment.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(id))
    }
}
