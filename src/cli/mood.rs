use crate::{info, mood::resolve_mood, types::Condition};

pub fn mood(condition: String) {
    let condition = Condition::from(condition.as_str());
    info!("{} → \"{}\"", condition, resolve_mood(&condition));
}
