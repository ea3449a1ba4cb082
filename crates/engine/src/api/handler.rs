//! Inbound message dispatch.
//!
//! Each `ClientMessage` is turned into zero or more `ServerMessage`s for the
//! host. Teleports themselves leave through the `TeleportPort`, ahead of the
//! chat and sound lines returned here.

use std::sync::Arc;

use warps_domain::{PlayerId, Warp};
use warps_shared::{
    ClientMessage, CommandPermission, ListMode, LocalizedText, PlayerContext, ServerMessage,
};

use crate::app::App;
use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::ports::ClockPort;
use crate::stores::PresentedList;
use crate::use_cases::warps::{
    CreateWarpInput, CreationOutcome, RemoveOutcome, TeleportOutcome, WarpError, WarpListEntry,
};

use super::commands;
use super::messages::{error_text, keys, particles, sounds};
use super::views;

pub struct MessageHandler {
    app: Arc<App>,
    item_id: String,
    /// Item uses seen during the current tick, keyed by player.
    item_debounce: TtlCache<PlayerId>,
}

impl MessageHandler {
    pub fn new(app: Arc<App>, settings: &AppSettings, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            app,
            item_id: settings.item_id.clone(),
            item_debounce: TtlCache::new(settings.tick, clock),
        }
    }

    /// Dispatch a parsed host message to the matching use case.
    pub async fn handle(&self, msg: ClientMessage) -> Vec<ServerMessage> {
        match msg {
            ClientMessage::Hello => vec![ServerMessage::Registration {
                item: self.item_id.clone(),
                commands: commands::descriptors(),
            }],

            // Commands
            ClientMessage::TeleportCommand { player, name } => {
                if let Some(denied) = self.check_permission(&player) {
                    return denied;
                }
                self.teleport(&player, name.as_deref()).await
            }
            ClientMessage::AddWarpCommand {
                player,
                name,
                icon,
                location,
            } => {
                if let Some(denied) = self.check_permission(&player) {
                    return denied;
                }
                let input = CreateWarpInput {
                    name,
                    icon,
                    location,
                };
                self.create(&player, input).await
            }
            ClientMessage::RemoveWarpCommand { player, name } => {
                if let Some(denied) = self.check_permission(&player) {
                    return denied;
                }
                self.remove(&player, name.as_deref()).await
            }

            // Item
            ClientMessage::ItemUse { player, item } => {
                if !self.accept_item_use(&player, &item).await {
                    return Vec::new();
                }
                self.teleport(&player, None).await
            }
            ClientMessage::ItemUseOn {
                player,
                item,
                block,
                face,
            } => {
                if !self.accept_item_use(&player, &item).await {
                    return Vec::new();
                }
                if !player.is_sneaking {
                    return self.teleport(&player, None).await;
                }
                let input = CreateWarpInput {
                    location: Some(block.offset(face)),
                    ..Default::default()
                };
                self.create(&player, input).await
            }

            // Menus
            ClientMessage::WarpListSelection {
                player,
                mode,
                index,
            } => self.select_from_list(&player, mode, index).await,
            ClientMessage::CategorySelected { player, index } => {
                let result = self.app.use_cases.warps.create.choose_category(player.id, index);
                self.creation_response(player.id, result)
            }
            ClientMessage::IconSelected { player, index } => {
                let result = self.app.use_cases.warps.create.choose_icon(player.id, index);
                self.creation_response(player.id, result)
            }
            ClientMessage::IconPickerBack { player } => {
                let result = self.app.use_cases.warps.create.back(player.id);
                self.creation_response(player.id, result)
            }
            ClientMessage::DetailsSubmitted { player, form } => {
                let result = self
                    .app
                    .use_cases
                    .warps
                    .create
                    .submit_details(player.id, views::details_form(form))
                    .await;
                self.creation_response(player.id, result)
            }
            ClientMessage::FormDismissed { player } => {
                self.app.stores.presented_lists.remove(player.id);
                let outcome = self.app.use_cases.warps.create.dismiss(player.id);
                self.creation_response(player.id, Ok(outcome))
            }

            ClientMessage::Unknown => {
                tracing::debug!("Ignoring unknown host message");
                Vec::new()
            }
        }
    }

    fn check_permission(&self, player: &PlayerContext) -> Option<Vec<ServerMessage>> {
        if commands::is_permitted(player, CommandPermission::GameDirector) {
            return None;
        }
        tracing::info!(player_id = %player.id, player = %player.name, "Command refused, not a game director");
        Some(vec![chat(player.id, LocalizedText::new(keys::NO_PERMISSION))])
    }

    /// Whether an item use should be acted on: right item, first use this tick.
    async fn accept_item_use(&self, player: &PlayerContext, item: &str) -> bool {
        if item != self.item_id {
            return false;
        }
        if !self.item_debounce.insert_if_absent(player.id).await {
            tracing::debug!(player_id = %player.id, "Item use debounced");
            return false;
        }
        true
    }

    async fn teleport(&self, player: &PlayerContext, name: Option<&str>) -> Vec<ServerMessage> {
        let result = self
            .app
            .use_cases
            .warps
            .teleport
            .execute(player.id, &player.position, &player.dimension, name)
            .await;

        match result {
            Ok(TeleportOutcome::Teleported(warp)) => teleported(player.id, &warp),
            Ok(TeleportOutcome::Choose(entries)) => {
                self.present_list(player.id, ListMode::Teleport, entries)
            }
            Err(e) => vec![chat(player.id, error_text(&e))],
        }
    }

    async fn remove(&self, player: &PlayerContext, name: Option<&str>) -> Vec<ServerMessage> {
        let result = self
            .app
            .use_cases
            .warps
            .remove
            .execute(name, &player.position, &player.dimension)
            .await;

        match result {
            Ok(RemoveOutcome::Removed(warp)) => removed(player.id, &warp),
            Ok(RemoveOutcome::Choose(entries)) => {
                self.present_list(player.id, ListMode::Remove, entries)
            }
            Err(e) => vec![chat(player.id, error_text(&e))],
        }
    }

    async fn create(&self, player: &PlayerContext, input: CreateWarpInput) -> Vec<ServerMessage> {
        let result = self
            .app
            .use_cases
            .warps
            .create
            .execute(player.id, &player.position, &player.dimension, input)
            .await;
        self.creation_response(player.id, result)
    }

    fn present_list(
        &self,
        player_id: PlayerId,
        mode: ListMode,
        entries: Vec<WarpListEntry>,
    ) -> Vec<ServerMessage> {
        if entries.is_empty() {
            return vec![chat(player_id, LocalizedText::new(keys::NO_WARPS))];
        }
        let message = views::warp_list(player_id, mode, &entries);
        self.app.stores.presented_lists.insert(
            player_id,
            PresentedList {
                mode,
                warps: entries.into_iter().map(|entry| entry.warp).collect(),
            },
        );
        vec![message]
    }

    async fn select_from_list(
        &self,
        player: &PlayerContext,
        mode: ListMode,
        index: usize,
    ) -> Vec<ServerMessage> {
        let Some(warp) = self
            .app
            .stores
            .presented_lists
            .take(player.id, mode, index)
        else {
            tracing::debug!(player_id = %player.id, ?mode, index, "Selection without a matching list");
            return vec![chat(player.id, LocalizedText::new(keys::INVALID_SELECTION))];
        };

        let warps = &self.app.use_cases.warps;
        let result = match mode {
            ListMode::Teleport => warps
                .teleport
                .teleport_to(player.id, &warp)
                .await
                .map(|()| teleported(player.id, &warp)),
            ListMode::Remove => warps
                .remove
                .remove_exact(&warp)
                .await
                .map(|()| removed(player.id, &warp)),
        };
        result.unwrap_or_else(|e| vec![chat(player.id, error_text(&e))])
    }

    fn creation_response(
        &self,
        player_id: PlayerId,
        result: Result<CreationOutcome, WarpError>,
    ) -> Vec<ServerMessage> {
        match result {
            Ok(CreationOutcome::Prompt(prompt)) => vec![views::wizard_prompt(player_id, prompt)],
            Ok(CreationOutcome::Retry { reason, prompt }) => vec![
                chat(player_id, error_text(&reason)),
                views::wizard_prompt(player_id, prompt),
            ],
            Ok(CreationOutcome::Created(warp)) => created(player_id, &warp),
            Ok(CreationOutcome::Closed) => Vec::new(),
            Err(e) => vec![chat(player_id, error_text(&e))],
        }
    }
}

fn chat(player_id: PlayerId, text: LocalizedText) -> ServerMessage {
    ServerMessage::Chat { player_id, text }
}

fn sound(player_id: PlayerId, sound: &str) -> ServerMessage {
    ServerMessage::PlaySound {
        player_id,
        sound: sound.to_string(),
    }
}

fn created(player_id: PlayerId, warp: &Warp) -> Vec<ServerMessage> {
    vec![
        chat(
            player_id,
            LocalizedText::new(keys::CREATED).with_param(&warp.name),
        ),
        sound(player_id, sounds::CREATED),
        ServerMessage::SpawnParticle {
            dimension: warp.dimension.clone(),
            particle: particles::CREATED.to_string(),
            position: warp.position,
        },
    ]
}

fn removed(player_id: PlayerId, warp: &Warp) -> Vec<ServerMessage> {
    vec![
        chat(
            player_id,
            LocalizedText::new(keys::REMOVED).with_param(&warp.name),
        ),
        sound(player_id, sounds::REMOVED),
    ]
}

fn teleported(player_id: PlayerId, warp: &Warp) -> Vec<ServerMessage> {
    vec![
        chat(
            player_id,
            LocalizedText::new(keys::TELEPORTED).with_param(&warp.name),
        ),
        sound(player_id, sounds::TELEPORTED),
    ]
}
