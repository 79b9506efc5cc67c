use core::fmt::{Debug, Formatter};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

type TextIndex = u32;

/// Interned symbol: a predicate name, a constant or a variable name.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy)]
pub struct Text(TextIndex);

#[derive(Default)]
pub struct TextMap {
    val_to_idx: HashMap<String, TextIndex>,
    idx_to_val: Vec<String>,
}

impl TextMap {
    fn insert_str(&mut self, val: &str) -> TextIndex {
        if let Some(&idx) = self.val_to_idx.get(val) {
            idx
        } else {
            let idx = TextIndex::try_from(self.idx_to_val.len()).expect("text table overflow");
            self.val_to_idx.insert(val.to_string(), idx);
            self.idx_to_val.push(val.to_string());
            idx
        }
    }
    fn get_str(&self, idx: TextIndex) -> &str {
        &self.idx_to_val[idx as usize]
    }
}

static TEXT_MAP: OnceLock<RwLock<TextMap>> = OnceLock::new();

fn text_map() -> &'static RwLock<TextMap> {
    TEXT_MAP.get_or_init(Default::default)
}

impl Text {
    pub fn from_str(s: &str) -> Self {
        {
            let map: &TextMap = &text_map().read().expect("poisoned");
            if let Some(&idx) = map.val_to_idx.get(s) {
                return Self(idx);
            }
        }
        let map: &mut TextMap = &mut text_map().write().expect("poisoned");
        Self(map.insert_str(s))
    }
    /// Calls `func` with the interned string without copying it out.
    pub fn with_str<R>(self, func: impl FnOnce(&str) -> R) -> R {
        let map: &TextMap = &text_map().read().expect("poisoned");
        func(map.get_str(self.0))
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}
