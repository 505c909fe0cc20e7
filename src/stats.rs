use schema::{StatOverrides, StatTable};

/// EVs given to every stat when a set declares no EVs at all.
pub const DEFAULT_EV: u8 = 82;
/// Baseline for stats missing from a set's partial EV map.
pub const UNSET_EV: u8 = 0;
/// Highest EV a single stat may hold.
pub const MAX_EV: u8 = 252;
/// IVs default to the maximum whether or not the set declares any.
pub const MAX_IV: u8 = 31;

/// Resolve a set's EVs into a full spread.
///
/// With no overrides every stat gets [`DEFAULT_EV`]. As soon as any override
/// is present the baseline drops to zero and only the listed stats are set.
pub fn resolve_evs(overrides: Option<&StatOverrides>) -> StatTable {
    match overrides {
        None => StatTable::uniform(DEFAULT_EV),
        Some(overrides) => apply(StatTable::uniform(UNSET_EV), overrides),
    }
}

/// Resolve a set's IVs into a full spread. Unlisted stats stay at [`MAX_IV`].
pub fn resolve_ivs(overrides: Option<&StatOverrides>) -> StatTable {
    let baseline = StatTable::uniform(MAX_IV);
    match overrides {
        None => baseline,
        Some(overrides) => apply(baseline, overrides),
    }
}

fn apply(mut table: StatTable, overrides: &StatOverrides) -> StatTable {
    for (stat, value) in overrides.iter() {
        table.set(stat, value);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::Stat;

    #[test]
    fn test_missing_evs_default_to_82_everywhere() {
        assert_eq!(resolve_evs(None), StatTable::uniform(82));
    }

    #[test]
    fn test_partial_evs_start_from_zero() {
        let overrides = StatOverrides::from([(Stat::Hp, 252), (Stat::Spe, 252)]);

        assert_eq!(
            resolve_evs(Some(&overrides)),
            StatTable {
                hp: 252,
                atk: 0,
                def: 0,
                spa: 0,
                spd: 0,
                spe: 252,
            }
        );
    }

    #[test]
    fn test_empty_ev_map_still_counts_as_declared() {
        let overrides = StatOverrides::default();
        assert_eq!(resolve_evs(Some(&overrides)), StatTable::uniform(0));
    }

    #[test]
    fn test_missing_ivs_default_to_31_everywhere() {
        assert_eq!(resolve_ivs(None), StatTable::uniform(31));
    }

    #[test]
    fn test_partial_ivs_keep_max_baseline() {
        // Unlike EVs, declaring one IV leaves the others at the maximum.
        let overrides = StatOverrides::from([(Stat::Atk, 0)]);
        let ivs = resolve_ivs(Some(&overrides));

        assert_eq!(ivs.atk, 0);
        assert_eq!(ivs.hp, 31);
        assert_eq!(ivs.spe, 31);
        assert_eq!(ivs.total(), 31 * 5);
    }
}
