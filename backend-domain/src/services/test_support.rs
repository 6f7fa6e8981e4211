use serde_json::{json, Value};

pub fn attack(attacker: &str, defender: &str, order: u32) -> Value {
    json!({
        "attackerTag": attacker,
        "defenderTag": defender,
        "stars": 2,
        "destructionPercentage": 75,
        "order": order,
        "duration": 160
    })
}

pub fn member(tag: &str, attacks: Vec<Value>) -> Value {
    json!({
        "tag": tag,
        "name": format!("name {}", tag),
        "townhallLevel": 15,
        "mapPosition": 1,
        "opponentAttacks": 0,
        "bestOpponentAttack": {"attackerTag": "#X", "defenderTag": tag, "stars": 1, "order": 99},
        "attacks": attacks
    })
}

pub fn war_document(
    clan_tag: &str,
    opponent_tag: &str,
    preparation_start: &str,
    clan_members: Vec<Value>,
    opponent_members: Vec<Value>,
) -> Value {
    json!({
        "state": "warEnded",
        "teamSize": clan_members.len(),
        "preparationStartTime": preparation_start,
        "clan": {"tag": clan_tag, "name": "clan", "members": clan_members},
        "opponent": {"tag": opponent_tag, "name": "opponent", "members": opponent_members}
    })
}
