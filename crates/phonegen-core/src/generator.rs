// ── Number generator ──
//
// Pattern substitution: every `X` becomes an independently drawn digit,
// everything else is copied. Duplicates within a batch are possible and
// accepted.

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::model::{Batch, BatchSize, CountryRecord, PLACEHOLDER};

/// Generate a batch using the thread-local RNG.
pub fn generate(country: &'static CountryRecord, size: BatchSize) -> Batch {
    generate_with(&mut rand::rng(), country, size)
}

/// Generate a batch from a caller-supplied RNG (seeded runs, tests).
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    country: &'static CountryRecord,
    size: BatchSize,
) -> Batch {
    let numbers: Vec<String> = (0..size.as_usize())
        .map(|_| format_number(rng, country))
        .collect();

    debug!(country = country.id, count = numbers.len(), "generated batch");

    Batch {
        country_id: country.id,
        country_name: country.name,
        numbers,
        generated_at: Utc::now(),
    }
}

/// Produce one formatted number: `"{dial_code} {filled pattern}"`.
pub fn format_number<R: Rng + ?Sized>(rng: &mut R, country: &CountryRecord) -> String {
    let mut number = String::with_capacity(country.formatted_len());
    number.push_str(country.dial_code);
    number.push(' ');
    number.extend(country.pattern.chars().map(|c| {
        if c == PLACEHOLDER {
            char::from(b'0' + rng.random_range(0..10u8))
        } else {
            c
        }
    }));
    number
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn batch_has_requested_length() {
        let country = Catalog::builtin().get("cn").unwrap();
        let batch = generate(country, BatchSize::new(37).unwrap());
        assert_eq!(batch.len(), 37);
        assert_eq!(batch.country_id, "cn");
        assert_eq!(batch.country_name, "China");
    }

    #[test]
    fn every_number_matches_country_format() {
        for country in Catalog::builtin().all() {
            let batch = generate(country, BatchSize::new(20).unwrap());
            for number in &batch.numbers {
                assert!(country.matches(number), "{number} does not match {country:?}");
                assert_eq!(number.len(), country.formatted_len());
                assert!(number.starts_with(country.dial_code));
            }
        }
    }

    #[test]
    fn fixed_prefix_is_preserved() {
        let country = Catalog::builtin().get("jp").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let number = format_number(&mut rng, country);
        assert!(number.starts_with("+81 90-"), "{number}");
    }

    #[test]
    fn same_seed_same_batch() {
        let country = Catalog::builtin().get("de").unwrap();
        let size = BatchSize::new(50).unwrap();
        let a = generate_with(&mut StdRng::seed_from_u64(42), country, size);
        let b = generate_with(&mut StdRng::seed_from_u64(42), country, size);
        assert_eq!(a.numbers, b.numbers);
    }

    #[test]
    fn maximum_batch_size_is_supported() {
        let country = Catalog::builtin().first();
        let batch = generate(country, BatchSize::new(i64::from(BatchSize::MAX)).unwrap());
        assert_eq!(batch.len(), 10_000);
        assert!(batch.numbers.iter().all(|n| country.matches(n)));
    }

    #[test]
    fn digits_are_spread_across_all_values() {
        // 11 placeholders x 200 numbers: every digit should show up.
        let country = Catalog::builtin().get("cn").unwrap();
        let batch = generate_with(
            &mut StdRng::seed_from_u64(1),
            country,
            BatchSize::new(200).unwrap(),
        );
        let text = batch.to_text();
        for digit in '0'..='9' {
            assert!(text.contains(digit), "digit {digit} never generated");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generated_batches_have_exact_size_and_format(
            index in 0usize..200,
            count in 1i64..=300,
            seed in any::<u64>(),
        ) {
            let catalog = Catalog::builtin();
            let country = &catalog.all()[index % catalog.len()];
            let size = BatchSize::new(count).unwrap();
            let batch = generate_with(&mut StdRng::seed_from_u64(seed), country, size);

            prop_assert_eq!(batch.len(), size.as_usize());
            for number in &batch.numbers {
                prop_assert!(country.matches(number));
            }
        }
    }
}
