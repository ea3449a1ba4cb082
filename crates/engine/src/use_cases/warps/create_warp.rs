//! Create warp use case.
//!
//! A fully specified `addwarp` stores the warp immediately. Anything less
//! opens the creation wizard, whose per-player state lives in the
//! `WizardSessionStore` until the warp is stored or the player walks away.

use std::sync::Arc;

use warps_domain::{
    CreationWizard, DetailsForm, DimensionId, DomainError, IconCatalog, PlayerId, Position, Warp,
    WarpDraft, WarpName, WizardStep,
};

use crate::entities::WarpRegistry;
use crate::stores::WizardSessionStore;

use super::error::WarpError;
use super::types::{CategoryChoice, CreationOutcome, WizardPrompt};

/// Arguments of `addwarp`; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWarpInput {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub location: Option<Position>,
}

pub struct CreateWarp {
    registry: Arc<WarpRegistry>,
    catalog: Arc<IconCatalog>,
    sessions: Arc<WizardSessionStore>,
}

impl CreateWarp {
    pub fn new(
        registry: Arc<WarpRegistry>,
        catalog: Arc<IconCatalog>,
        sessions: Arc<WizardSessionStore>,
    ) -> Self {
        Self {
            registry,
            catalog,
            sessions,
        }
    }

    /// Store the warp directly, or start the wizard when something is missing.
    ///
    /// `position` and `dimension` are where the player stands; the location
    /// defaults to the former.
    pub async fn execute(
        &self,
        player_id: PlayerId,
        position: &Position,
        dimension: &DimensionId,
        input: CreateWarpInput,
    ) -> Result<CreationOutcome, WarpError> {
        let name = input.name.filter(|n| !n.trim().is_empty());

        if let (Some(name), Some(icon), Some(location)) = (&name, &input.icon, input.location) {
            let name = WarpName::from_input(name).map_err(WarpError::InvalidName)?;
            let icon = self
                .catalog
                .find(icon)
                .unwrap_or_else(|| self.catalog.fallback())
                .path
                .clone();
            let warp = Warp::new(name, location.rounded(), dimension.clone()).with_icon(icon);

            self.registry.add(&warp).await?;
            self.sessions.remove(player_id);
            return Ok(CreationOutcome::Created(warp));
        }

        let draft = WarpDraft {
            name,
            icon: input.icon,
            position: Some(input.location.unwrap_or(*position)),
            dimension: dimension.clone(),
        };
        let wizard = CreationWizard::start(draft, &self.catalog);
        let prompt = self.prompt_for(&wizard);
        self.sessions.insert(player_id, wizard);

        tracing::debug!(player_id = %player_id, step = ?prompt_step(&prompt), "Creation wizard started");
        Ok(CreationOutcome::Prompt(prompt))
    }

    pub fn choose_category(
        &self,
        player_id: PlayerId,
        index: usize,
    ) -> Result<CreationOutcome, WarpError> {
        self.advance(player_id, |wizard, catalog| {
            wizard.choose_category(catalog, index)
        })
    }

    pub fn choose_icon(&self, player_id: PlayerId, index: usize) -> Result<CreationOutcome, WarpError> {
        self.advance(player_id, |wizard, catalog| wizard.choose_icon(catalog, index))
    }

    pub fn back(&self, player_id: PlayerId) -> Result<CreationOutcome, WarpError> {
        self.advance(player_id, |wizard, _| wizard.back())
    }

    /// Validate the details form and store the warp.
    ///
    /// A rejected form (missing field, bad coordinate, taken name) keeps the
    /// session alive and re-prompts with exactly what was typed. The store is
    /// only written once every field validates.
    pub async fn submit_details(
        &self,
        player_id: PlayerId,
        form: DetailsForm,
    ) -> Result<CreationOutcome, WarpError> {
        let mut wizard = self
            .sessions
            .get(player_id)
            .ok_or(WarpError::NoActiveWizard)?;

        let warp = match wizard.submit_details(form) {
            Ok(warp) => warp,
            Err(e) => {
                let prompt = self.prompt_for(&wizard);
                self.sessions.insert(player_id, wizard);
                return Ok(CreationOutcome::Retry {
                    reason: WarpError::Details(e),
                    prompt,
                });
            }
        };

        match self.registry.add(&warp).await.map_err(WarpError::from) {
            Ok(()) => {
                self.sessions.remove(player_id);
                Ok(CreationOutcome::Created(warp))
            }
            Err(reason @ WarpError::DuplicateName(_)) => {
                let prompt = self.prompt_for(&wizard);
                self.sessions.insert(player_id, wizard);
                Ok(CreationOutcome::Retry { reason, prompt })
            }
            Err(e) => {
                self.sessions.insert(player_id, wizard);
                Err(e)
            }
        }
    }

    /// The player closed a wizard menu; nothing is stored.
    pub fn dismiss(&self, player_id: PlayerId) -> CreationOutcome {
        if self.sessions.remove(player_id).is_some() {
            tracing::debug!(player_id = %player_id, "Creation wizard dismissed");
        }
        CreationOutcome::Closed
    }

    fn advance(
        &self,
        player_id: PlayerId,
        step: impl FnOnce(&mut CreationWizard, &IconCatalog) -> Result<(), DomainError>,
    ) -> Result<CreationOutcome, WarpError> {
        let mut wizard = self
            .sessions
            .get(player_id)
            .ok_or(WarpError::NoActiveWizard)?;

        let result = step(&mut wizard, &self.catalog);
        let prompt = self.prompt_for(&wizard);
        self.sessions.insert(player_id, wizard);

        Ok(match result {
            Ok(()) => CreationOutcome::Prompt(prompt),
            Err(e) => CreationOutcome::Retry {
                reason: WarpError::InvalidSelection(e),
                prompt,
            },
        })
    }

    fn prompt_for(&self, wizard: &CreationWizard) -> WizardPrompt {
        match wizard.step() {
            WizardStep::SelectCategory => WizardPrompt::SelectCategory {
                categories: self
                    .catalog
                    .categories()
                    .into_iter()
                    .map(|category| CategoryChoice {
                        id: category.to_string(),
                        icon_path: self
                            .catalog
                            .icons_in_category(category)
                            .first()
                            .map(|entry| entry.path.clone())
                            .unwrap_or_else(|| self.catalog.fallback().path.clone()),
                    })
                    .collect(),
            },
            WizardStep::SelectIcon { category } => WizardPrompt::SelectIcon {
                category: category.clone(),
                icons: self
                    .catalog
                    .icons_in_category(category)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            WizardStep::EnterDetails => WizardPrompt::EnterDetails {
                icon_path: self
                    .catalog
                    .path_for(wizard.draft().icon.as_deref())
                    .to_string(),
                form: wizard.form().clone(),
            },
        }
    }
}

fn prompt_step(prompt: &WizardPrompt) -> &'static str {
    match prompt {
        WizardPrompt::SelectCategory { .. } => "select_category",
        WizardPrompt::SelectIcon { .. } => "select_icon",
        WizardPrompt::EnterDetails { .. } => "enter_details",
    }
}
