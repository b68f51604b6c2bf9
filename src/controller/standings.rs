use std::collections::HashMap;

use crate::model::{ClassPlacing, ClassResults, Player, PlayerClass, SlugId};

/// A player's posted 18-hole snapshot, as fed to the standings.
#[derive(Clone, Debug)]
pub struct PostedScore {
    pub player_id: SlugId,
    pub gross: i32,
    pub net: i32,
    pub to_par: i32,
}

/// Standings for each of the four fixed classes. A player with no posted
/// net score (zero or missing) has not finished and is left out; classes
/// with nobody qualifying are omitted entirely.
///
/// Positions are 1-based, tied net scores share one, and the next
/// distinct net takes position = its index + 1: nets [70, 70, 72] place
/// [1, 1, 3].
#[must_use]
pub fn class_results(players: &[Player], posted: &[PostedScore]) -> Vec<ClassResults> {
    let posted_by_player: HashMap<&SlugId, &PostedScore> =
        posted.iter().map(|p| (&p.player_id, p)).collect();

    PlayerClass::ALL
        .iter()
        .filter_map(|&class| {
            let mut placings: Vec<ClassPlacing> = players
                .iter()
                .filter(|p| p.class == class)
                .map(|p| {
                    let snapshot = posted_by_player.get(&p.id);
                    ClassPlacing {
                        player_id: p.id.clone(),
                        player_name: p.name.clone(),
                        is_member: p.is_member,
                        gross: snapshot.map_or(0, |s| s.gross),
                        net: snapshot.map_or(0, |s| s.net),
                        to_par: snapshot.map_or(0, |s| s.to_par),
                        position: 0,
                    }
                })
                .filter(|p| p.net > 0)
                .collect();

            placings.sort_by_key(|p| (p.net, p.gross));

            let mut position = 1;
            for i in 0..placings.len() {
                if i > 0 && placings[i].net > placings[i - 1].net {
                    position = (i as i32) + 1;
                }
                placings[i].position = position;
            }

            (!placings.is_empty()).then_some(ClassResults {
                class,
                players: placings,
            })
        })
        .collect()
}
