#[cfg(test)]
mod tests {
    use crate::battle::calculators::outspeed_probability;
    use crate::battle::commands::CommandCatalog;
    use crate::battle::rng::TurnRng;
    use crate::battle::tests::common::{no_draws_rng, TestUnitBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::CommandId;

    #[test]
    fn test_enemy_escape_always_succeeds() {
        let mut player = TestUnitBuilder::player().build();
        let mut enemy = TestUnitBuilder::enemy()
            .with_commands(vec![CommandId::Escape])
            .build();

        let result = CommandCatalog::enemy()
            .get(CommandId::Escape)
            .action(&mut enemy, &mut player, &mut no_draws_rng());

        assert_eq!(result.message, "\nSlime runs away!");
        assert!(result.escaped);
        assert_eq!(enemy.hp, 0);
        assert_eq!(player.hp, 40);
    }

    #[rstest]
    // speed 10 against 6: 40 / 46 = 0.87
    #[case("fast roll gets away", 0.5, true)]
    #[case("slow roll is blocked", 0.9, false)]
    fn test_player_escape_roll(#[case] desc: &str, #[case] roll: f64, #[case] expect_escape: bool) {
        let mut player = TestUnitBuilder::player().build();
        let mut enemy = TestUnitBuilder::enemy().build();
        let mut rng = TurnRng::new_for_test(vec![roll]);

        let result = CommandCatalog::player()
            .get(CommandId::Escape)
            .action(&mut player, &mut enemy, &mut rng);

        assert_eq!(result.escaped, expect_escape, "{}", desc);
        if expect_escape {
            assert_eq!(result.message, "\nHero runs away!\nGot away safely!");
            assert_eq!(enemy.hp, 0);
        } else {
            assert_eq!(result.message, "\nHero runs away!\nBut the way was blocked!");
            assert_eq!(enemy.hp, 30);
        }
        assert_eq!(player.hp, 40);
    }

    #[rstest]
    #[case(5, 20)]
    #[case(10, 6)]
    #[case(2, 30)]
    fn test_player_escape_rate_follows_speed(#[case] player_speed: u32, #[case] enemy_speed: u32) {
        const TRIALS: u32 = 4000;
        let expected = outspeed_probability(player_speed, enemy_speed);
        let catalog = CommandCatalog::player();

        for seed in [1, 2, 3] {
            let mut rng = TurnRng::new_seeded(seed);
            let mut escapes = 0;
            for _ in 0..TRIALS {
                let mut player = TestUnitBuilder::player().with_stats(20, 10, player_speed).build();
                let mut enemy = TestUnitBuilder::enemy().with_stats(12, 6, enemy_speed).build();
                if catalog.get(CommandId::Escape).action(&mut player, &mut enemy, &mut rng).escaped {
                    escapes += 1;
                }
            }
            let rate = escapes as f64 / TRIALS as f64;
            assert!(
                (rate - expected).abs() < 0.04,
                "seed {}: escape rate {} too far from {}",
                seed,
                rate,
                expected
            );
        }
    }
}
