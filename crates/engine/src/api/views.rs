//! Conversions from use-case results to wire payloads.

use warps_domain::{round_half_up, DetailsForm, PlayerId};
use warps_shared::{
    CategoryData, DetailsFormData, IconData, ListMode, ServerMessage, WarpListEntryData,
};

use crate::use_cases::warps::{WarpListEntry, WizardPrompt};

pub(super) fn warp_list(
    player_id: PlayerId,
    mode: ListMode,
    entries: &[WarpListEntry],
) -> ServerMessage {
    ServerMessage::ShowWarpList {
        player_id,
        mode,
        entries: entries
            .iter()
            .map(|entry| WarpListEntryData {
                name: entry.warp.name.to_string(),
                icon_path: entry.icon_path.clone(),
                dimension: entry.warp.dimension.clone(),
                position: entry.warp.position,
                distance: entry.distance.map(|d| round_half_up(d) as u64),
            })
            .collect(),
    }
}

pub(super) fn wizard_prompt(player_id: PlayerId, prompt: WizardPrompt) -> ServerMessage {
    match prompt {
        WizardPrompt::SelectCategory { categories } => ServerMessage::ShowCategoryPicker {
            player_id,
            categories: categories
                .into_iter()
                .map(|choice| CategoryData {
                    translation_key: format!("warps.category.{}", choice.id),
                    id: choice.id,
                    icon_path: choice.icon_path,
                })
                .collect(),
        },
        WizardPrompt::SelectIcon { category, icons } => ServerMessage::ShowIconPicker {
            player_id,
            category,
            icons: icons
                .into_iter()
                .map(|icon| IconData {
                    name: icon.name,
                    translation_key: icon.translation_key,
                    path: icon.path,
                })
                .collect(),
        },
        WizardPrompt::EnterDetails { icon_path, form } => ServerMessage::ShowDetailsForm {
            player_id,
            icon_path,
            form: form_data(form),
        },
    }
}

pub(super) fn details_form(form: DetailsFormData) -> DetailsForm {
    DetailsForm {
        name: form.name,
        x: form.x,
        y: form.y,
        z: form.z,
    }
}

fn form_data(form: DetailsForm) -> DetailsFormData {
    DetailsFormData {
        name: form.name,
        x: form.x,
        y: form.y,
        z: form.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warps_domain::{DimensionId, Position, Warp, WarpName};

    #[test]
    fn distances_are_whole_blocks() {
        let warp = Warp::new(
            WarpName::new("Tower").unwrap(),
            Position::new(3.0, 4.0, 0.0),
            DimensionId::overworld(),
        );
        let entries = vec![
            WarpListEntry {
                warp: warp.clone(),
                icon_path: "textures/items/bed_red".into(),
                distance: Some(12.5),
            },
            WarpListEntry {
                warp,
                icon_path: "textures/items/bed_red".into(),
                distance: None,
            },
        ];

        let ServerMessage::ShowWarpList { entries, .. } =
            warp_list(PlayerId::new(), ListMode::Teleport, &entries)
        else {
            panic!("expected a warp list");
        };
        assert_eq!(entries[0].distance, Some(13));
        assert_eq!(entries[1].distance, None);
    }
}
