use anyhow::{Context, Result};
use csv::Writer;

use fpl_scout::data::model::Position;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in [lo, hi].
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

/// Typical price window per position, in 0.5-grid units.
fn cost_window(position: Position) -> (u64, u64) {
    // Expressed in half-units so every draw lands on the grid.
    match position {
        Position::Goalkeeper => (8, 12),  // 4.0 .. 6.0
        Position::Defender => (8, 14),    // 4.0 .. 7.0
        Position::Midfielder => (9, 26),  // 4.5 .. 13.0
        Position::Forward => (9, 28),     // 4.5 .. 14.0
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "players_sample.csv".to_string());

    let mut rng = SimpleRng::new(42);

    let squad_sizes = [
        (Position::Goalkeeper, 20),
        (Position::Defender, 40),
        (Position::Midfielder, 40),
        (Position::Forward, 20),
    ];

    let mut writer = Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer
        .write_record([
            "first_name",
            "second_name",
            "web_name",
            "singular_name",
            "now_cost",
            "minutes",
            "total_points",
            "expected_goals",
            "goals_scored",
        ])
        .context("writing CSV header")?;

    let mut total_rows = 0u32;
    for (position, count) in squad_sizes {
        let (lo_halves, hi_halves) = cost_window(position);
        for i in 0..count {
            let now_cost = rng.range(lo_halves, hi_halves) as f64 * 0.5;
            // A handful of players barely feature.
            let minutes = if rng.next_f64() < 0.15 {
                rng.range(0, 90)
            } else {
                rng.range(200, 3420)
            };

            // Points loosely track price and playing time.
            let form = 0.5 + rng.next_f64();
            let total_points =
                ((minutes as f64 / 90.0) * now_cost * 0.45 * form).round() as i64;

            // Attacking output only for outfield attackers.
            let expected_goals = match position {
                Position::Goalkeeper => 0.0,
                Position::Defender => rng.next_f64() * 3.0,
                Position::Midfielder => rng.next_f64() * 12.0,
                Position::Forward => rng.next_f64() * 25.0,
            } * (minutes as f64 / 3420.0);
            let goals_scored =
                (expected_goals * (0.6 + rng.next_f64() * 0.8)).round() as u32;

            let second_name = format!("{}{}", position.as_str(), i);
            writer
                .write_record([
                    "Sample".to_string(),
                    second_name.clone(),
                    second_name,
                    position.as_str().to_string(),
                    format!("{now_cost:.1}"),
                    minutes.to_string(),
                    total_points.to_string(),
                    format!("{expected_goals:.2}"),
                    goals_scored.to_string(),
                ])
                .context("writing CSV row")?;
            total_rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {total_rows} players to {output_path}");
    Ok(())
}
