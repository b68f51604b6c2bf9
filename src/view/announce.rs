use serde::{Deserialize, Serialize};

use crate::model::{ClassPlacing, ClassResults, PlayerClass};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WinnerAnnouncement {
    pub class: PlayerClass,
    pub message: String,
}

/// "E" at level par, otherwise signed: "+3", "-1".
#[must_use]
pub fn format_to_par(to_par: i32) -> String {
    if to_par == 0 {
        "E".to_string()
    } else if to_par > 0 {
        format!("+{to_par}")
    } else {
        format!("{to_par}")
    }
}

fn placing_line(place: &str, placing: &ClassPlacing) -> String {
    let membership = if placing.is_member { "Member" } else { "Guest" };
    format!(
        "{place} Place winner is {name} ({membership}) with a net score of {net} ({gross} gross)",
        name = placing.player_name,
        net = placing.net,
        gross = placing.gross,
    )
}

/// One announcement per class that has finishers. The message layout is a
/// contract relied on by callers: line 0 header, line 1 blank, line 2
/// first place, then second place if present, then a tiebreak note when
/// the top two finished on the same net score.
#[must_use]
pub fn winner_announcements(class_results: &[ClassResults]) -> Vec<WinnerAnnouncement> {
    class_results
        .iter()
        .filter_map(|result| {
            let first = result.players.first()?;
            let mut lines = vec![
                format!("Class {} Final Results", result.class),
                String::new(),
                placing_line("First", first),
            ];

            if let Some(second) = result.players.get(1) {
                lines.push(placing_line("Second", second));
                if second.net == first.net {
                    lines.push(format!(
                        "First and second place tied at net {}, decided by gross score",
                        first.net
                    ));
                }
            }

            Some(WinnerAnnouncement {
                class: result.class,
                message: lines.join("\n"),
            })
        })
        .collect()
}
