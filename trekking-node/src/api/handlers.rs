// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::Json;
use axum::extract::{Path, State};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;
use trekking_core::Group;
use trekking_store::GroupStore;

use crate::ApiError;

const USAGE: &str = "Welcome to LootjesTrekken!

use /t                                           to list ongoing trekkingen
use /summary                                     to list ongoing trekkingen and their state
use /t/{trekking-name}/add                       to start a new trekking with this name
use /t/{trekking-name}/people                    to list people in a trekking
use /t/{trekking-name}/people/{name}/add         to add a person to a trekking with this name
use /t/{trekking-name}/people/{name}/remove      to remove a person from a trekking with this name
use /t/{trekking-name}/trek                      to trek this trekking
use /t/{trekking-name}/people/{name}/getrokken   to see who you have getrokken
";

pub async fn home() -> &'static str {
    USAGE
}

pub async fn list_names<S: GroupStore>(State(store): State<S>) -> Result<String, ApiError> {
    debug!("listing all trekkingen");

    let names: Vec<String> = store.names().await?.into_iter().collect();
    Ok(names.join("\n"))
}

pub async fn list_summaries<S: GroupStore>(State(store): State<S>) -> Result<String, ApiError> {
    debug!("listing summaries of all trekkingen");

    Ok(store.summaries().await?.join("\n"))
}

pub async fn create<S: GroupStore>(
    State(store): State<S>,
    Path(trekking): Path<String>,
) -> Result<String, ApiError> {
    debug!(%trekking, "creating new trekking");

    store.create(&Group::new(trekking.as_str())).await?;
    Ok(format!("New trekking created with name {trekking}"))
}

pub async fn raw<S: GroupStore>(
    State(store): State<S>,
    Path(trekking): Path<String>,
) -> Result<Json<Group>, ApiError> {
    debug!(%trekking, "getting raw trekking");

    Ok(Json(store.fetch(&trekking).await?))
}

pub async fn people<S: GroupStore>(
    State(store): State<S>,
    Path(trekking): Path<String>,
) -> Result<String, ApiError> {
    debug!(%trekking, "getting people of trekking");

    let group = store.fetch(&trekking).await?;
    Ok(group.participants().join("\n"))
}

pub async fn add_person<S: GroupStore>(
    State(store): State<S>,
    Path((trekking, name)): Path<(String, String)>,
) -> Result<&'static str, ApiError> {
    debug!(%trekking, %name, "adding person to trekking");

    let mut group = store.fetch(&trekking).await?;
    group.add_participant(name)?;
    store.update(&group).await?;

    Ok("Added successfully")
}

pub async fn remove_person<S: GroupStore>(
    State(store): State<S>,
    Path((trekking, name)): Path<(String, String)>,
) -> Result<&'static str, ApiError> {
    debug!(%trekking, %name, "removing person from trekking");

    let mut group = store.fetch(&trekking).await?;
    group.remove_participant(&name)?;
    store.update(&group).await?;

    Ok("Removed successfully")
}

pub async fn draw<S: GroupStore>(
    State(store): State<S>,
    Path(trekking): Path<String>,
) -> Result<&'static str, ApiError> {
    debug!(%trekking, "drawing trekking");

    let mut group = store.fetch(&trekking).await?;
    group.draw(&mut ChaCha20Rng::from_os_rng())?;
    store.update(&group).await?;

    Ok("Trekking successfully drawn")
}

pub async fn recipient<S: GroupStore>(
    State(store): State<S>,
    Path((trekking, name)): Path<(String, String)>,
) -> Result<String, ApiError> {
    debug!(%trekking, %name, "getting drawn person");

    let group = store.fetch(&trekking).await?;
    let recipient = group.recipient(&name)?;

    Ok(format!("You have drawn: {recipient}"))
}
