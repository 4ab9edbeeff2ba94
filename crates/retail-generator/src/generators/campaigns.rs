//! Campaign plan generator.

use super::pick;
use crate::stream::{Component, RandomStream};
use chrono::Duration;
use rand::Rng;
use retail_core::{CampaignConfig, CampaignPlan, Category, Channel, City, Scope};

const START_OFFSET_DAYS: [i64; 3] = [1, 3, 5];
const DURATION_DAYS: [i64; 2] = [7, 14];
const DISCOUNTS: [u8; 6] = [5, 10, 15, 20, 25, 30];
const BUDGETS: [u32; 5] = [20_000, 40_000, 60_000, 80_000, 100_000];

/// Generate `config.count` campaigns. No defects are injected.
pub fn generate_campaign_plan(config: &CampaignConfig, seed: u64) -> Vec<CampaignPlan> {
    let mut rng = RandomStream::new(seed).rng_for(Component::Campaigns);

    (1..=config.count)
        .map(|index| {
            let offset = Duration::days(pick(&mut rng, &START_OFFSET_DAYS));
            let start_date = config.anchor_date + offset;
            let end_date = start_date + Duration::days(pick(&mut rng, &DURATION_DAYS));

            CampaignPlan {
                campaign_id: CampaignPlan::id_for(index),
                start_date,
                end_date,
                city: pick_scope(&mut rng, &City::ALL),
                channel: pick_scope(&mut rng, &Channel::ALL),
                category: pick_scope(&mut rng, &Category::ALL),
                discount_pct: pick(&mut rng, &DISCOUNTS),
                promo_budget: pick(&mut rng, &BUDGETS),
            }
        })
        .collect()
}

/// Pick uniformly among `values` and the `All` wildcard.
fn pick_scope<T: Copy, R: Rng>(rng: &mut R, values: &[T]) -> Scope<T> {
    let idx = rng.gen_range(0..=values.len());
    values.get(idx).copied().map_or(Scope::All, Scope::Only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_campaign_rows() {
        let config = CampaignConfig::default();
        let plan = generate_campaign_plan(&config, 42);

        assert_eq!(plan.len(), 10);
        assert_eq!(plan[0].campaign_id, "C01");
        assert_eq!(plan[9].campaign_id, "C10");

        for campaign in &plan {
            assert!(campaign.end_date > campaign.start_date);
            let offset = (campaign.start_date - config.anchor_date).num_days();
            assert!(START_OFFSET_DAYS.contains(&offset));
            let length = (campaign.end_date - campaign.start_date).num_days();
            assert!(DURATION_DAYS.contains(&length));
            assert!(DISCOUNTS.contains(&campaign.discount_pct));
            assert!(BUDGETS.contains(&campaign.promo_budget));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let config = CampaignConfig::default();
        assert_eq!(
            generate_campaign_plan(&config, 42),
            generate_campaign_plan(&config, 42)
        );
    }

    #[test]
    fn test_pick_scope_includes_wildcard() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks: Vec<Scope<City>> = (0..400).map(|_| pick_scope(&mut rng, &City::ALL)).collect();

        assert!(picks.iter().any(|s| s.is_all()));
        for city in City::ALL {
            assert!(picks.contains(&Scope::Only(city)));
        }
    }
}
