use facility_api::PageRequest;
use facility_console::{Documents, ListController, Notices};

use super::App;
use crate::render;

const TILES: &[(&str, &str)] = &[
    ("Notices", "facility notices list"),
    ("Documents", "facility documents list"),
    ("Facility projects", "not available yet"),
];

pub(super) async fn show(app: &App) -> anyhow::Result<()> {
    app.sign_in().await?;
    let user = match app.session.current() {
        Some(user) => Some(user),
        None => app.session.refresh().await,
    };

    let request = PageRequest::new(0, app.configuration.page_size()?)?;
    let notices = ListController::<Notices>::new(app.client.clone(), request);
    let documents = ListController::<Documents>::new(app.client.clone(), request);
    tokio::join!(notices.mount(), documents.mount());

    match &user {
        Some(user) => println!("Welcome, {}", render::user_line(user)),
        None => println!("Not signed in"),
    }
    println!();
    for (name, hint) in TILES {
        println!("  {:<18} {}", name, hint);
    }

    let notices = notices.state();
    println!("\nLatest notices");
    match notices.error {
        Some(error) => println!("{}", error),
        None => print!("{}", render::notice_table(&notices)),
    }

    let documents = documents.state();
    println!("\nLatest documents");
    match documents.error {
        Some(error) => println!("{}", error),
        None => print!("{}", render::document_table(&documents)),
    }
    Ok(())
}
