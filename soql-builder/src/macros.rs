/// Builds a [`SelectQuery`](crate::query::SelectQuery) from a field list and an object name.
///
/// Relationship paths such as `Account.Name` may be used as fields.
///
/// # Example
///
/// ```
/// use soql_builder::select;
///
/// let query = select!(Id, Name, Account.Name from Contact);
/// assert_eq!(query.render(), "SELECT Id, Name, Account.Name FROM Contact");
/// ```
#[macro_export]
macro_rules! select {
    ($($field:ident $(.$path:ident)*),+ from $object:ident) => {
        $crate::query::SelectQuery::new(stringify!($object)).select([
            $(concat!(stringify!($field) $(, ".", stringify!($path))*)),+
        ])
    };
}

/// Adds a condition to a query, turning the right-hand side into a SOQL literal.
///
/// The value goes through [`to_value`](crate::utils::to_value), so strings are
/// quoted and escaped and arrays produce an `IN` list. `==` is accepted as an
/// alias of `=`, and lowercase `in`, `like`, `includes` and `excludes` are
/// upper-cased. A leading `not` negates the operator, as in `not in` or
/// `not like`.
///
/// # Example
///
/// ```
/// use soql_builder::{filter, select};
///
/// let mut query = select!(Id from Contact);
/// filter!(query, LastName == "O'Brien");
/// filter!(query, Account.Industry = vec!["Energy", "Media"]);
/// filter!(query, NumberOfEmployees > 50);
/// filter!(query, Title not like "%Intern%");
///
/// assert_eq!(
///     query.render(),
///     "SELECT Id FROM Contact WHERE LastName = 'O\\'Brien' \
///      AND Account.Industry IN ('Energy','Media') AND NumberOfEmployees > 50 \
///      AND Title NOT LIKE '%Intern%'"
/// );
/// ```
#[macro_export]
macro_rules! filter {
    ($query:expr, $object:ident.$field:ident not $op:tt $value:expr) => {
        $query.add_condition_with(
            concat!(stringify!($object), ".", stringify!($field)),
            $crate::utils::to_value($value),
            format!("NOT {}", $crate::utils::operator(stringify!($op))),
        )
    };

    ($query:expr, $field:ident not $op:tt $value:expr) => {
        $query.add_condition_with(
            stringify!($field),
            $crate::utils::to_value($value),
            format!("NOT {}", $crate::utils::operator(stringify!($op))),
        )
    };

    ($query:expr, $object:ident.$field:ident $op:tt $value:expr) => {
        $query.add_condition_with(
            concat!(stringify!($object), ".", stringify!($field)),
            $crate::utils::to_value($value),
            $crate::utils::operator(stringify!($op)),
        )
    };

    ($query:expr, $field:ident $op:tt $value:expr) => {
        $query.add_condition_with(
            stringify!($field),
            $crate::utils::to_value($value),
            $crate::utils::operator(stringify!($op)),
        )
    };
}
