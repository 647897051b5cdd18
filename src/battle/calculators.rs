use crate::battle::rng::TurnRng;

/// Calculate the damage of a plain attack.
///
/// `floor((attack - defense / 2) / (2 + r / 128))` with `r` uniform in `0..256`.
/// A non-positive result becomes a coin flip between 0 and 1, so an attack is
/// never guaranteed to do nothing.
pub fn calculate_attack_damage(attack: u32, defense: u32, rng: &mut TurnRng) -> u32 {
    let divisor_roll = rng.below(256, "attack divisor");
    let base = attack as i64 - (defense / 2) as i64;

    let damage = if base > 0 {
        let divisor = 2.0 + divisor_roll as f64 / 128.0;
        (base as f64 / divisor).floor() as u32
    } else {
        0
    };

    if damage == 0 {
        rng.below(2, "attack chip damage")
    } else {
        damage
    }
}

/// Probability that a unit with `speed` outpaces one with `opponent_speed`.
///
/// Used both for the turn order of an encounter and for the player's escape.
pub fn outspeed_probability(speed: u32, opponent_speed: u32) -> f64 {
    let weighted = speed as f64 * 4.0;
    let total = weighted + opponent_speed as f64;
    if total == 0.0 {
        // Two motionless units: treat as an even contest.
        return 0.5;
    }
    weighted / total
}

/// Rolls whether the unit with `speed` wins a speed contest.
pub fn roll_outspeed(speed: u32, opponent_speed: u32, rng: &mut TurnRng, reason: &str) -> bool {
    rng.chance(reason) < outspeed_probability(speed, opponent_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    // (40 - 10) / 2.0 = 15
    #[case(40, 20, 0.0, 15)]
    // (40 - 10) / (2 + 128/128) = 10
    #[case(40, 20, 0.5, 10)]
    // (40 - 10) / (2 + 255/128) = 7.52 -> 7
    #[case(40, 20, 0.999, 7)]
    // odd defense rounds down before halving: (20 - 5) / 2 = 7.5 -> 7
    #[case(20, 11, 0.0, 7)]
    fn test_attack_damage_formula(
        #[case] attack: u32,
        #[case] defense: u32,
        #[case] divisor_roll: f64,
        #[case] expected: u32,
    ) {
        let mut rng = TurnRng::new_for_test(vec![divisor_roll]);
        assert_eq!(calculate_attack_damage(attack, defense, &mut rng), expected);
    }

    #[rstest]
    #[case("defense overwhelms attack", 5, 40, 0.0)]
    #[case("attack equals half defense", 10, 20, 0.5)]
    #[case("positive base floors to zero", 11, 20, 0.999)]
    fn test_weak_attacks_fall_back_to_coin_flip(
        #[case] desc: &str,
        #[case] attack: u32,
        #[case] defense: u32,
        #[case] divisor_roll: f64,
    ) {
        let mut rng = TurnRng::new_for_test(vec![divisor_roll, 0.2]);
        assert_eq!(calculate_attack_damage(attack, defense, &mut rng), 0, "{}", desc);

        let mut rng = TurnRng::new_for_test(vec![divisor_roll, 0.7]);
        assert_eq!(calculate_attack_damage(attack, defense, &mut rng), 1, "{}", desc);
    }

    #[test]
    fn test_weak_attack_damage_is_always_zero_or_one() {
        let mut rng = TurnRng::new_seeded(11);
        for _ in 0..1000 {
            let damage = calculate_attack_damage(3, 30, &mut rng);
            assert!(damage <= 1);
        }
    }

    #[test]
    fn test_outspeed_probability() {
        assert_eq!(outspeed_probability(10, 0), 1.0);
        assert_eq!(outspeed_probability(0, 10), 0.0);
        assert_eq!(outspeed_probability(5, 20), 0.5);
        assert_eq!(outspeed_probability(0, 0), 0.5);
    }
}
