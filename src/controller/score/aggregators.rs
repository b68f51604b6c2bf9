use crate::model::{HoleScore, PlayerRound, RoundSummary, ScoreTotals};

/// Totals over the scored holes of a nine (or any slice). Unscored holes
/// contribute nothing, including to the par baseline: `to_par` for a
/// partial round is relative to the holes played, not the full course.
#[must_use]
pub fn totals_for(holes: &[HoleScore]) -> ScoreTotals {
    let mut gross = 0;
    let mut net = 0;
    let mut par_played = 0;

    for hole in holes {
        if let (Some(g), Some(n)) = (hole.gross, hole.net) {
            gross += g;
            net += n;
            par_played += hole.par;
        }
    }

    ScoreTotals {
        gross,
        net,
        to_par: net - par_played,
    }
}

/// Front-nine / back-nine / 18-hole running summary for a scorecard.
#[must_use]
pub fn round_summary(round: &PlayerRound) -> RoundSummary {
    let split = round.holes.len().min(9);
    let front_nine = totals_for(&round.holes[..split]);
    let back_nine = totals_for(&round.holes[split..]);

    let total = ScoreTotals {
        gross: front_nine.gross + back_nine.gross,
        net: front_nine.net + back_nine.net,
        to_par: front_nine.to_par + back_nine.to_par,
    };

    let stableford_total = round
        .holes
        .iter()
        .any(|h| h.stableford.is_some())
        .then(|| round.holes.iter().filter_map(|h| h.stableford).sum());

    RoundSummary {
        front_nine,
        back_nine,
        total,
        stableford_total,
    }
}
