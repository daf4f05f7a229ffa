//! Two-list transfer ("穿梭框") state.

use serde::{Deserialize, Serialize};

/// An item that can move between the source and target lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferItem {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub disabled: bool,
}

impl TransferItem {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Which of the two lists an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

/// Transfer widget state.
///
/// Source = items whose key is not in `target_keys`, in data-source order.
/// Target = the remaining items, also in data-source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferState {
    data_source: Vec<TransferItem>,
    target_keys: Vec<String>,
    source_checked: Vec<String>,
    target_checked: Vec<String>,
    source_search: String,
    target_search: String,
}

impl TransferState {
    pub fn new(data_source: Vec<TransferItem>) -> Self {
        Self {
            data_source,
            ..Default::default()
        }
    }

    pub fn target_keys(&self) -> &[String] {
        &self.target_keys
    }

    fn checked(&self, side: Side) -> &Vec<String> {
        match side {
            Side::Source => &self.source_checked,
            Side::Target => &self.target_checked,
        }
    }

    fn checked_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Source => &mut self.source_checked,
            Side::Target => &mut self.target_checked,
        }
    }

    pub fn search(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source_search,
            Side::Target => &self.target_search,
        }
    }

    pub fn set_search(&mut self, side: Side, value: &str) {
        match side {
            Side::Source => self.source_search = value.to_string(),
            Side::Target => self.target_search = value.to_string(),
        }
    }

    /// Items on `side`, filtered by that side's search text (case-insensitive)
    pub fn items(&self, side: Side) -> Vec<&TransferItem> {
        let needle = self.search(side).to_lowercase();
        self.data_source
            .iter()
            .filter(|item| {
                let in_target = self.target_keys.contains(&item.key);
                match side {
                    Side::Source => !in_target,
                    Side::Target => in_target,
                }
            })
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_checked(&self, side: Side, key: &str) -> bool {
        self.checked(side).iter().any(|k| k == key)
    }

    /// Check or uncheck an item. Disabled or unknown items are left alone.
    pub fn set_checked(&mut self, side: Side, key: &str, checked: bool) {
        let allowed = self
            .data_source
            .iter()
            .any(|item| item.key == key && !item.disabled);
        if !allowed {
            return;
        }
        let list = self.checked_mut(side);
        let present = list.iter().any(|k| k == key);
        if checked && !present {
            list.push(key.to_string());
        } else if !checked && present {
            list.retain(|k| k != key);
        }
    }

    /// Whether the move button toward the other side is enabled
    pub fn can_move(&self, from: Side) -> bool {
        !self.checked(from).is_empty()
    }

    /// Append checked source keys to the target and clear source checks
    pub fn move_to_target(&mut self) {
        let moved = std::mem::take(&mut self.source_checked);
        for key in moved {
            if !self.target_keys.contains(&key) {
                self.target_keys.push(key);
            }
        }
    }

    /// Remove checked target keys from the target and clear target checks
    pub fn move_to_source(&mut self) {
        let moved = std::mem::take(&mut self.target_checked);
        self.target_keys.retain(|key| !moved.contains(key));
    }
}

/// Exercise list used by the gallery demo
pub fn demo_items() -> Vec<TransferItem> {
    vec![
        TransferItem::new("1", "每日步行"),
        TransferItem::new("2", "游泳"),
        TransferItem::new("3", "瑜伽"),
        TransferItem::new("4", "骑行"),
        TransferItem::new("5", "慢跑"),
        TransferItem::new("6", "力量训练").disabled(),
    ]
}
