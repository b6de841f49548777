//! Decoding and filtering of the feed's string-embedded activity payloads.

use common::{GameType, ModeFilter};

/// The embedded payload is either one activity or a batch of them.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum DecodedPayload {
    Many(Vec<Activity>),
    Single(Activity),
}

impl DecodedPayload {
    pub fn into_activities(self) -> Vec<Activity> {
        match self {
            Self::Many(activities) => activities,
            Self::Single(activity) => vec![activity],
        }
    }
}

/// One activity record. `gameMode`/`gameId` can appear at the top level or
/// one level down in `payload`, the top level winning when both are set.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub game_mode: Option<String>,
    pub game_id: Option<String>,
    pub payload: Option<ActivityPayload>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPayload {
    pub game_mode: Option<String>,
    pub game_id: Option<String>,
    pub competitive_game_mode: Option<String>,
}

impl Activity {
    pub fn game_mode(&self) -> Option<&str> {
        self.game_mode
            .as_deref()
            .or_else(|| self.payload.as_ref().and_then(|p| p.game_mode.as_deref()))
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id
            .as_deref()
            .or_else(|| self.payload.as_ref().and_then(|p| p.game_id.as_deref()))
    }

    /// The competitive marker only ever appears in the nested payload
    pub fn is_competitive(&self) -> bool {
        self.payload
            .as_ref()
            .and_then(|p| p.competitive_game_mode.as_deref())
            .map(|mode| mode != "None")
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedFilter {
    pub game_type: GameType,
    pub mode: ModeFilter,
}

impl FeedFilter {
    pub fn matches(&self, activity: &Activity) -> bool {
        let game_mode = match activity.game_mode() {
            Some(m) => m,
            None => return false,
        };
        if activity.game_id().is_none() {
            return false;
        }

        match self.game_type {
            GameType::Team if game_mode != "TeamDuels" => return false,
            GameType::Duels if game_mode == "TeamDuels" => return false,
            _ => {}
        }

        match self.mode {
            ModeFilter::All => true,
            ModeFilter::Competitive => activity.is_competitive(),
            ModeFilter::Casual => !activity.is_competitive(),
        }
    }
}

/// Decodes one entry's raw payload and returns the ids of all matching
/// activities. A payload that fails to decode yields nothing, the walk goes
/// on with the next entry.
pub fn extract_game_ids(raw: &str, filter: &FeedFilter) -> Vec<String> {
    let decoded: DecodedPayload = match serde_json::from_str(raw) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Failed to decode feed payload: {:?}", e);
            return Vec::new();
        }
    };

    decoded
        .into_activities()
        .into_iter()
        .filter(|activity| filter.matches(activity))
        .filter_map(|activity| activity.game_id().map(|id| id.to_owned()))
        .collect()
}
