use storefront::backend::server::config::DEFAULT_DATABASE;
use storefront::backend::users::mongo::{MongoUserStore, USERS_COLLECTION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let uri = std::env::var("MONGODB_URI").map_err(|_| "MONGODB_URI must be set")?;
    let database = std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

    println!("DEBUGGING DATABASE CONNECTION");
    println!("=============================");
    println!("Database: {}", database);

    println!("\nConnecting and pinging...");
    let store = match MongoUserStore::connect(&uri, &database).await {
        Ok(store) => {
            println!("Connection successful, username index in place");
            store
        }
        Err(e) => {
            println!("Connection failed: {}", e);
            return Err(e.into());
        }
    };

    let count = store.count().await?;
    println!("Collection '{}' holds {} user document(s)", USERS_COLLECTION, count);

    store.client().shutdown().await;
    Ok(())
}
