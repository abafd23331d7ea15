// Document store bootstrap

use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Connects to the document store and confirms the connection with a ping.
/// The process must not start serving requests until this succeeds.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    tracing::debug!("Connecting to document store");

    let client = Client::with_uri_str(uri).await?;
    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 }, None).await?;

    tracing::info!("Document store connection confirmed");
    Ok(db)
}
