use deluxe::ExtractAttributes;

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(sobject))]
struct ObjectAttributes {
    name: Option<String>,
}

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(field))]
struct FieldAttributes {
    rename: Option<String>,
    skip: Option<bool>,
}

/// API name of the object: `#[sobject(name = "...")]` or the struct identifier.
pub fn object_name(input: &mut syn::DeriveInput) -> syn::Result<String> {
    let attributes = ObjectAttributes::extract_attributes(input)?;
    Ok(attributes.name.unwrap_or_else(|| input.ident.to_string()))
}

/// API names of the selectable fields, in declaration order.
pub fn field_names(
    fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
) -> syn::Result<Vec<String>> {
    let mut names = Vec::new();

    for field in fields {
        let attributes = FieldAttributes::extract_attributes(&mut field.clone())?;
        if attributes.skip.unwrap_or(false) {
            continue;
        }

        let name = match attributes.rename {
            Some(rename) => rename,
            None => match field.ident.as_ref() {
                Some(ident) => strip_raw(ident),
                None => return Err(syn::Error::new_spanned(field, "expected a named field")),
            },
        };
        names.push(name);
    }

    Ok(names)
}

// `r#type` is selected as `type`
fn strip_raw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
