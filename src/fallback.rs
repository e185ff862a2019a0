//! Pre-authored judgments used when the remote path cannot be trusted.
//!
//! This table is the availability guarantee: selection never fails, performs
//! no I/O, and every entry is fully populated.

use crate::models::Judgment;
use rand::Rng;
use std::sync::OnceLock;

static TABLE: OnceLock<Vec<Judgment>> = OnceLock::new();

fn judgment(score: &str, critique: &str, quick: &[&str], mentor: &[&str]) -> Judgment {
    Judgment {
        score: score.to_string(),
        critique: critique.to_string(),
        quick_advice: quick.iter().map(|s| s.to_string()).collect(),
        mentor_advice: mentor.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full fallback table, built once per process.
pub fn entries() -> &'static [Judgment] {
    TABLE.get_or_init(|| {
        vec![
            judgment(
                "C-",
                "This outfit radiates a confusing kind of confidence. The top is \
                 fighting your skin tone and losing, and the trousers have \
                 surrendered to gravity entirely. The overall effect is a student \
                 who overslept and sprinted to an 8 a.m. lecture.",
                &[
                    "Sharpen up: tuck the top in, or swap it for a slimmer cut.",
                    "Color control: too many competing colors; match the shoes to the top.",
                    "Detail points: add a hat or fix the hair so it reads deliberate, not disheveled.",
                ],
                &[
                    "Silhouette: choose fitted but not tight cuts; oversized reads sloppy here.",
                    "Palette: build on one base color plus a single accent to stop the clashing.",
                    "Accessories: a hat or a watch would lift the whole look's polish.",
                    "Fabric: pick materials that suit the season and the occasion.",
                ],
            ),
            judgment(
                "F",
                "Visual-pollution tier. Is the jacket competing with the hoodie for \
                 worst in show? You have successfully dodged every fashionable \
                 possibility and invented a brand-new flavor of forgettable.",
                &[
                    "Take the jacket off, now. Replace it with a plain black one.",
                    "Create layers: the inner layer is too long; roll it to show some waistline.",
                    "The shoes drag it down too: clean white sneakers or boots instead.",
                ],
                &[
                    "Swap the statement piece: a classic jacket will raise the baseline quality.",
                    "Layering: learn the long-inner, short-outer proportion trick.",
                    "Footwear: pick shoes that agree with the outfit's overall register.",
                    "Proportion: tuck or crop to rebalance the upper and lower body.",
                ],
            ),
            judgment(
                "D",
                "Classic case of trying way too hard. How many logos is that - are \
                 you auditioning to be a walking billboard? The mash-up is bold, \
                 just not the good kind of bold.",
                &[
                    "Subtract: keep one statement logo and make everything else plain.",
                    "Unify the palette: those trousers are shouting; go dark grey or denim blue.",
                    "Relax: your posture is stiffer than the clothes, drop the shoulders.",
                ],
                &[
                    "Brand restraint: one or two designed pieces, not a logo parade.",
                    "Color discipline: anchor the look in neutrals before adding accents.",
                    "Style coherence: every piece should belong to the same outfit, not five.",
                    "Confidence: clothes serve the wearer; a natural stance beats any logo.",
                ],
            ),
        ]
    })
}

/// Pick one entry uniformly at random.
pub fn random_entry() -> Judgment {
    let table = entries();
    let index = rand::thread_rng().gen_range(0..table.len());
    table[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_at_least_three_fully_populated_entries() {
        let table = entries();
        assert!(table.len() >= 3);
        for entry in table {
            assert!(!entry.score.is_empty());
            assert!(!entry.critique.is_empty());
            assert!(!entry.quick_advice.is_empty());
            assert!(!entry.mentor_advice.is_empty());
        }
    }

    #[test]
    fn test_random_entry_comes_from_table() {
        for _ in 0..20 {
            let entry = random_entry();
            assert!(entries().contains(&entry));
        }
    }
}
