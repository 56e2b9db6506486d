/// Asserts that two f32 values are within `eps` of each other.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {
        $crate::assert_close!($actual, $expected, 1e-5)
    };
    ($actual:expr, $expected:expr, $eps:expr) => {
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() <= $eps,
            "{} = {} is not within {} of {}",
            stringify!($actual),
            a,
            $eps,
            e
        );
    };
}

/// Asserts that every cell of both fields lies in `[0, 1]`.
#[macro_export]
macro_rules! assert_fields_bounded {
    ($world:expr) => {
        for p in $crate::common::cells(&$world) {
            let food = $world.food_strength(p);
            let foraging = $world.foraging_strength(p);
            assert!(
                (0.0..=1.0).contains(&food),
                "food field {} out of range at {:?}",
                food,
                p
            );
            assert!(
                (0.0..=1.0).contains(&foraging),
                "foraging field {} out of range at {:?}",
                foraging,
                p
            );
        }
    };
}
