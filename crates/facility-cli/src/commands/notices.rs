use anyhow::bail;

use facility_console::{
    CreateNotice, DetailFetcher, ListController, MutationController, Notices, SubmitOutcome,
};

use super::App;
use crate::cli::{NoticeCommand, PageArgs};
use crate::render;

pub(super) async fn run(app: &App, command: NoticeCommand) -> anyhow::Result<()> {
    app.sign_in().await?;
    match command {
        NoticeCommand::List(args) => list(app, args).await,
        NoticeCommand::Show { id } => show(app, id).await,
        NoticeCommand::Create { title, content } => create(app, title, content).await,
    }
}

async fn list(app: &App, args: PageArgs) -> anyhow::Result<()> {
    let list = ListController::<Notices>::new(app.client.clone(), app.page_request(args)?);
    list.mount().await;

    let state = list.state();
    if let Some(error) = state.error {
        bail!(error);
    }
    print!("{}", render::notice_table(&state));
    println!("{}", render::pagination_line(&list.pagination(), state.total_count));
    Ok(())
}

async fn show(app: &App, id: u64) -> anyhow::Result<()> {
    let detail = DetailFetcher::<Notices>::new(app.client.clone());
    detail.set_id(Some(id)).await;

    let state = detail.state();
    match (state.entity, state.error) {
        (_, Some(error)) => bail!(error),
        (Some(notice), None) => print!("{}", render::notice_detail(&notice)),
        (None, None) => bail!("Notice #{} not found", id),
    }
    Ok(())
}

async fn create(app: &App, title: String, content: String) -> anyhow::Result<()> {
    let form = MutationController::<CreateNotice>::new(app.client.clone());
    form.edit(|draft| {
        draft.title = title;
        draft.content = content;
    });

    match form.submit().await {
        SubmitOutcome::Completed(notice) => {
            println!("Created notice #{} {}", notice.id, notice.title);
            Ok(())
        }
        SubmitOutcome::Invalid(err) => bail!(err.message),
        SubmitOutcome::Failed(message) => bail!(message),
    }
}
