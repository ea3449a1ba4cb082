//! Warp creation wizard.
//!
//! A three-step form sequence: pick a category, pick an icon from it, then enter
//! the name and coordinates. The wizard carries a draft between steps and keeps
//! the last submitted details so a rejected form can be shown again as typed.
//!
//! ```text
//! SelectCategory --choose_category--> SelectIcon --choose_icon--> EnterDetails
//!        ^                                |                          |   ^
//!        +-------------back---------------+                          +---+
//!                                                        submit_details fails
//! ```

use crate::entities::Warp;
use crate::error::DomainError;
use crate::icon_catalog::IconCatalog;
use crate::value_objects::{parse_coordinate, DimensionId, Position, WarpName};

/// Current step of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    SelectCategory,
    SelectIcon { category: String },
    EnterDetails,
}

/// What is known about the warp being created.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WarpDraft {
    pub name: Option<String>,
    /// Icon path (or name, before it is resolved against the catalog).
    pub icon: Option<String>,
    pub position: Option<Position>,
    pub dimension: DimensionId,
}

/// Raw text of the details form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailsForm {
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
}

/// Why a details submission was not accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetailsError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("{axis} coordinate is not a number: {input:?}")]
    InvalidCoordinate { axis: &'static str, input: String },
    #[error("invalid name: {0}")]
    InvalidName(DomainError),
    #[error(transparent)]
    Transition(DomainError),
}

/// Explicit state machine behind the warp creation menus.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationWizard {
    step: WizardStep,
    draft: WarpDraft,
    form: DetailsForm,
}

impl CreationWizard {
    /// Start a wizard from a seeded draft.
    ///
    /// An icon that already resolves in the catalog skips the two selection
    /// steps.
    pub fn start(mut draft: WarpDraft, catalog: &IconCatalog) -> Self {
        let known_icon = draft
            .icon
            .as_deref()
            .and_then(|icon| catalog.find(icon))
            .map(|entry| entry.path.clone());

        let step = match known_icon {
            Some(path) => {
                draft.icon = Some(path);
                WizardStep::EnterDetails
            }
            None => {
                draft.icon = None;
                WizardStep::SelectCategory
            }
        };

        let seed = draft.position.map(|p| p.rounded());
        let form = DetailsForm {
            name: draft.name.clone().unwrap_or_default(),
            x: seed.map(|p| p.x.to_string()).unwrap_or_default(),
            y: seed.map(|p| p.y.to_string()).unwrap_or_default(),
            z: seed.map(|p| p.z.to_string()).unwrap_or_default(),
        };

        Self { step, draft, form }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn draft(&self) -> &WarpDraft {
        &self.draft
    }

    /// Values to prefill the details form with.
    pub fn form(&self) -> &DetailsForm {
        &self.form
    }

    /// `SelectCategory` → `SelectIcon`.
    pub fn choose_category(
        &mut self,
        catalog: &IconCatalog,
        index: usize,
    ) -> Result<(), DomainError> {
        if self.step != WizardStep::SelectCategory {
            return Err(self.unexpected("choose a category"));
        }
        let category = catalog
            .categories()
            .get(index)
            .map(|c| c.to_string())
            .ok_or_else(|| DomainError::validation(format!("No icon category at {}", index)))?;
        self.step = WizardStep::SelectIcon { category };
        Ok(())
    }

    /// `SelectIcon` → `EnterDetails`.
    pub fn choose_icon(&mut self, catalog: &IconCatalog, index: usize) -> Result<(), DomainError> {
        let WizardStep::SelectIcon { category } = &self.step else {
            return Err(self.unexpected("choose an icon"));
        };
        let entry = catalog
            .icons_in_category(category)
            .get(index)
            .copied()
            .ok_or_else(|| {
                DomainError::validation(format!("No icon at {} in category {}", index, category))
            })?;
        self.draft.icon = Some(entry.path.clone());
        self.step = WizardStep::EnterDetails;
        Ok(())
    }

    /// `SelectIcon` → `SelectCategory`.
    pub fn back(&mut self) -> Result<(), DomainError> {
        if !matches!(self.step, WizardStep::SelectIcon { .. }) {
            return Err(self.unexpected("go back"));
        }
        self.step = WizardStep::SelectCategory;
        Ok(())
    }

    /// Validate the details form and build the warp to commit.
    ///
    /// The submitted text is retained whether or not it validates, so the form
    /// can be re-shown with what the player typed. The wizard stays in
    /// `EnterDetails` either way; the caller ends it after a successful commit.
    pub fn submit_details(&mut self, form: DetailsForm) -> Result<Warp, DetailsError> {
        if self.step != WizardStep::EnterDetails {
            return Err(DetailsError::Transition(self.unexpected("submit details")));
        }
        self.form = form;

        if self.form.name.trim().is_empty() {
            return Err(DetailsError::MissingField("name"));
        }
        let x = coordinate("x", &self.form.x)?;
        let y = coordinate("y", &self.form.y)?;
        let z = coordinate("z", &self.form.z)?;
        let name = WarpName::from_input(&self.form.name).map_err(DetailsError::InvalidName)?;

        let position = Position::new(x, y, z).rounded();
        self.draft.name = Some(name.to_string());
        self.draft.position = Some(position);

        let mut warp = Warp::new(name, position, self.draft.dimension.clone());
        warp.icon = self.draft.icon.clone();
        Ok(warp)
    }

    fn unexpected(&self, action: &str) -> DomainError {
        DomainError::invalid_state_transition(format!("cannot {} during {:?}", action, self.step))
    }
}

fn coordinate(axis: &'static str, input: &str) -> Result<f64, DetailsError> {
    if input.trim().is_empty() {
        return Err(DetailsError::MissingField(axis));
    }
    parse_coordinate(axis, input).map_err(|_| DetailsError::InvalidCoordinate {
        axis,
        input: input.to_string(),
    })
}
