use mediawiki_http::{ClientOptions, QueryParams, QueryValue, WikiClient, WikiError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let endpoint = std::env::var("WIKI_API_ENDPOINT")
        .unwrap_or_else(|_| "https://test.wikipedia.org/w/api.php".to_owned());

    let logger = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "trace".into()))
        .finish();

    let wiki = WikiClient::new(endpoint)
        .with_options(ClientOptions {
            timeout_ms: 5_000,
            max_retries: 2,
            retry_delay_ms: 2_000,
        })
        .with_logger(logger);

    let siteinfo = wiki
        .get_json(QueryParams::values([
            ("action", QueryValue::text("query")),
            ("meta", QueryValue::text("siteinfo")),
            ("maxlag", QueryValue::from(5)),
        ]))
        .await?;
    println!("{}", siteinfo["query"]["general"]["sitename"]);

    match wiki
        .post_values(QueryParams::strings([("action", "edit"), ("title", "Sandbox")]))
        .await
    {
        Err(err @ WikiError::OperationFailed { .. }) => println!("expected failure: {err}"),
        other => println!("unexpected outcome: {other:?}"),
    }

    Ok(())
}
