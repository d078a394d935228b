//! Publishes a text share, and optionally an image share, for the member in `LINKEDIN_AUTHOR_URN`.
//!
//! ```text
//! LINKEDIN_ACCESS_TOKEN=... LINKEDIN_AUTHOR_URN=urn:li:person:abc123 \
//!     cargo run --example share -- ./photo.jpg
//! ```

use linkedin_pub_rs::{LinkedInClient, RegisterUploadRequest, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG=linkedin_pub_rs::response=debug shows raw response bodies
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let author = std::env::var("LINKEDIN_AUTHOR_URN").expect("LINKEDIN_AUTHOR_URN is not set");
    let client = LinkedInClient::from_env()?;

    let share_id = client
        .share_text(&author, "Hello from linkedin-pub-rs")
        .await?;
    println!("✅ Created text share: {share_id}");

    let Some(image_path) = std::env::args().nth(1) else {
        println!("No image path given, skipping image share");
        return Ok(());
    };

    let registration = client
        .register_upload(&RegisterUploadRequest::feed_image(&author))
        .await?;
    client
        .upload_registered_image(&registration, &image_path)
        .await?;

    match client
        .share_image(
            &author,
            "A picture from linkedin-pub-rs",
            registration.asset(),
            "Demo image",
            "Uploaded by the share demo",
        )
        .await
    {
        Ok(id) => println!("✅ Created image share: {id}"),
        Err(e) => eprintln!("❌ Image share failed: {e}"),
    }

    Ok(())
}
