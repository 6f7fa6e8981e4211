use crate::entities::{War, WarHit};
use crate::error::WarHitError;
use crate::services::war_normalizer::{normalize_event, normalize_member, normalize_war};
use crate::value_objects::PlayerTag;

/// Slices one war down to a single player's attacks and defenses.
///
/// Attacks keep the order they were stored in. Defenses are the opposing
/// side's attacks on the player, ascending by `order`, and carry the player's
/// own redacted record as `defender`.
pub fn extract_war_hit(war: &War, player_tag: &PlayerTag) -> Result<WarHit, WarHitError> {
    let Some((side, member)) = war.find_member(player_tag.as_str()) else {
        return Err(WarHitError::PlayerNotInWar {
            player_tag: player_tag.to_string(),
            war_id: war.identity().to_string(),
        });
    };
    let opponents = war.roster(side.opposite());

    let mut attacks = Vec::with_capacity(member.attacks.len());
    for attack in &member.attacks {
        let Some(defender) = opponents
            .iter()
            .find(|candidate| candidate.tag == attack.defender_tag)
        else {
            return Err(WarHitError::DefenderNotInWar {
                defender_tag: attack.defender_tag.clone(),
                war_id: war.identity().to_string(),
            });
        };
        attacks.push(normalize_event(attack, war.is_fresh_attack(attack), defender));
    }

    let defenses = war
        .attacks_against(side.opposite(), &member.tag)
        .into_iter()
        .map(|defense| normalize_event(defense, war.is_fresh_attack(defense), member))
        .collect();

    Ok(WarHit {
        war_data: normalize_war(war),
        member_data: normalize_member(member),
        attacks,
        defenses,
    })
}
