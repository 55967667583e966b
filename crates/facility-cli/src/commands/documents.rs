use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use facility_api::validation::validate_file_size;
use facility_client::FilePayload;
use facility_console::{
    DetailFetcher, Documents, DownloadController, FieldError, ListController,
    MutationController, SubmitOutcome, UploadDocument,
};

use super::App;
use crate::cli::{DocumentCommand, PageArgs};
use crate::render;

pub(super) async fn run(app: &App, command: DocumentCommand) -> anyhow::Result<()> {
    app.sign_in().await?;
    match command {
        DocumentCommand::List(args) => list(app, args).await,
        DocumentCommand::Show { id } => show(app, id).await,
        DocumentCommand::Upload {
            title,
            description,
            file,
        } => upload(app, title, description, &file).await,
        DocumentCommand::Download { id, out } => download(app, id, &out).await,
    }
}

async fn list(app: &App, args: PageArgs) -> anyhow::Result<()> {
    let list = ListController::<Documents>::new(app.client.clone(), app.page_request(args)?);
    list.mount().await;

    let state = list.state();
    if let Some(error) = state.error {
        bail!(error);
    }
    print!("{}", render::document_table(&state));
    println!("{}", render::pagination_line(&list.pagination(), state.total_count));
    Ok(())
}

async fn fetch(app: &App, id: u64) -> anyhow::Result<facility_api::DocumentDetail> {
    let detail = DetailFetcher::<Documents>::new(app.client.clone());
    detail.set_id(Some(id)).await;

    let state = detail.state();
    match (state.entity, state.error) {
        (_, Some(error)) => bail!(error),
        (Some(document), None) => Ok(document),
        (None, None) => bail!("Document #{} not found", id),
    }
}

async fn show(app: &App, id: u64) -> anyhow::Result<()> {
    let document = fetch(app, id).await?;
    print!("{}", render::document_detail(&document));
    Ok(())
}

/// Load a file for upload. Oversized files are rejected before reading.
async fn read_payload(path: &Path) -> anyhow::Result<FilePayload> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    validate_file_size(metadata.len())
        .map_err(|e| anyhow::anyhow!(FieldError::from_validation("file", e).message))?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    Ok(FilePayload::new(file_name, mime_type.essence_str(), bytes))
}

async fn upload(
    app: &App,
    title: String,
    description: Option<String>,
    file: &Path,
) -> anyhow::Result<()> {
    let payload = read_payload(file).await?;
    let form = MutationController::<UploadDocument>::new(app.client.clone());
    form.select_file(payload).map_err(|e| anyhow::anyhow!(e.message))?;
    form.edit(|draft| {
        draft.title = title;
        draft.description = description.unwrap_or_default();
    });

    match form.submit().await {
        SubmitOutcome::Completed(document) => {
            println!(
                "Uploaded document #{} {} ({})",
                document.id, document.title, document.formatted_file_size
            );
            Ok(())
        }
        SubmitOutcome::Invalid(err) => bail!(err.message),
        SubmitOutcome::Failed(message) => bail!(message),
    }
}

async fn download(app: &App, id: u64, out: &Path) -> anyhow::Result<()> {
    let document = fetch(app, id).await?;
    let controller = DownloadController::new(app.client.clone());

    let path: PathBuf = match controller.download(id, &document.file_name, out).await {
        Some(path) => path,
        None => bail!(controller.state().error.unwrap_or_default()),
    };
    println!("Saved {}", path.display());
    Ok(())
}
