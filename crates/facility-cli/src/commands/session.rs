use anyhow::bail;

use super::App;
use crate::render;

pub(super) async fn login(app: &App) -> anyhow::Result<()> {
    if app.configuration.credentials().is_none() {
        bail!("Set auth.username and auth.password, or pass --username and --password");
    }
    app.sign_in().await?;
    if let Some(user) = app.session.current() {
        println!("Signed in as {}", render::user_line(&user));
    }
    Ok(())
}

pub(super) async fn logout(app: &App) -> anyhow::Result<()> {
    app.sign_in().await?;
    if !app.session.logout().await {
        bail!(app.session.state().error.unwrap_or_default());
    }
    println!("Signed out.");
    Ok(())
}

pub(super) async fn whoami(app: &App) -> anyhow::Result<()> {
    app.sign_in().await?;
    let user = match app.session.current() {
        Some(user) => user,
        None => match app.session.refresh().await {
            Some(user) => user,
            None => bail!(app.session.state().error.unwrap_or_default()),
        },
    };
    println!("{}", render::user_line(&user));
    Ok(())
}
