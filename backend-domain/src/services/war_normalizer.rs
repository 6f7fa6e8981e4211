use serde_json::{Map, Value};

use crate::entities::{CleanClan, CleanEvent, CleanMember, CleanWar, War, WarAttack, WarClan, WarMember};

/// Ingestion bookkeeping that never leaves the service.
const VOLATILE_WAR_FIELDS: [&str; 3] = ["status_code", "_response_retry", "timestamp"];

/// Keys the output shapes define themselves; stray copies in pass-through
/// data would otherwise serialize twice.
const RESERVED_WAR_FIELDS: [&str; 1] = ["type"];
const RESERVED_MEMBER_FIELDS: [&str; 3] = ["attacks", "bestOpponentAttack", "defenses"];
const RESERVED_EVENT_FIELDS: [&str; 3] = ["fresh", "attack_order", "defender"];

pub fn normalize_war(war: &War) -> CleanWar {
    let mut extra = war.extra.clone();
    strip(&mut extra, &VOLATILE_WAR_FIELDS);
    strip(&mut extra, &RESERVED_WAR_FIELDS);
    CleanWar {
        clan: normalize_clan(&war.clan),
        opponent: normalize_clan(&war.opponent),
        preparation_start_time: war.preparation_start_time.as_str().to_string(),
        start_time: war
            .start_time
            .as_ref()
            .map(|time| time.as_str().to_string()),
        war_tag: war.war_tag.clone(),
        extra,
        war_type: war.war_type(),
    }
}

/// Drops the roster; members are re-attached per player by the extractor.
fn normalize_clan(clan: &WarClan) -> CleanClan {
    CleanClan {
        tag: clan.tag.clone(),
        extra: clan.extra.clone(),
    }
}

pub fn normalize_member(member: &WarMember) -> CleanMember {
    let mut extra = member.extra.clone();
    strip(&mut extra, &RESERVED_MEMBER_FIELDS);
    CleanMember {
        tag: member.tag.clone(),
        extra,
    }
}

/// Builds the output event with `defender` embedded as a redacted snapshot.
pub fn normalize_event(attack: &WarAttack, fresh: bool, defender: &WarMember) -> CleanEvent {
    let mut extra = attack.extra.clone();
    strip(&mut extra, &RESERVED_EVENT_FIELDS);
    CleanEvent {
        attacker_tag: attack.attacker_tag.clone(),
        defender_tag: attack.defender_tag.clone(),
        order: attack.order,
        extra,
        fresh,
        attack_order: attack.order,
        defender: normalize_member(defender),
    }
}

fn strip(map: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        map.remove(*key);
    }
}
