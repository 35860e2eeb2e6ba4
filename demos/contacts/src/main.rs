use anyhow::Result;
use soql_builder::prelude::*;

#[allow(dead_code)]
#[derive(SObject, Debug)]
#[sobject(name = "Contact")]
struct Contact {
    #[field(rename = "Id")]
    id: String,
    #[field(rename = "Name")]
    name: String,
    #[field(rename = "Email")]
    email: Option<String>,
    #[field(rename = "Account.Name")]
    account_name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let mut query = SelectQuery::of::<Contact>()
        .order_by("Name", Direction::Asc)
        .take(10);
    filter!(query, Account.Industry = vec!["Energy", "Media"]);
    filter!(query, Email != Option::<String>::None);

    log::info!("query:\n{}", query.pretty());
    println!("{}", config.query_url(&query));

    Ok(())
}
