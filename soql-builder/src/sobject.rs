//! Describing Rust types as Salesforce objects.

/// A Rust type standing in for a Salesforce object.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(SObject)]
/// #[sobject(name = "Contact")]
/// struct Contact {
///     #[field(rename = "Id")]
///     id: String,
///     #[field(rename = "LastName")]
///     last_name: String,
///     #[field(skip)]
///     cached: bool,
/// }
///
/// let query = SelectQuery::of::<Contact>();
/// assert_eq!(query.render(), "SELECT Id, LastName FROM Contact");
/// ```
pub trait SObject {
    /// API name of the object, used after `FROM`.
    const NAME: &'static str;

    /// API names of the selectable fields, in declaration order.
    const FIELDS: &'static [&'static str];
}
