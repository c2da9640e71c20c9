//! Weighted project sampling.
//!
//! Draws project names with replacement, where each project's chance is
//! `weight / sum(weights)`. The random source is always supplied by the
//! caller so runs can be reproduced with a seeded generator.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_timesheet::models::ProjectWeight;
//! use u_timesheet::sampling::WeightedSampler;
//!
//! let projects = vec![ProjectWeight::new("Apollo", 1), ProjectWeight::new("Gemini", 3)];
//! let sampler = WeightedSampler::new(&projects).unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let name = sampler.sample(&mut rng);
//! assert!(name == "Apollo" || name == "Gemini");
//! ```

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::SamplerError;
use crate::models::ProjectWeight;

/// Weighted sampler over a fixed project set.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    names: Vec<String>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl WeightedSampler {
    /// Builds a sampler.
    ///
    /// # Errors
    /// - [`SamplerError::Empty`] if `projects` is empty.
    /// - [`SamplerError::AllZero`] if every weight is zero.
    /// - [`SamplerError::Invalid`] if the weights cannot form a
    ///   distribution (e.g. their sum overflows).
    pub fn new(projects: &[ProjectWeight]) -> Result<Self, SamplerError> {
        if projects.is_empty() {
            return Err(SamplerError::Empty);
        }
        if projects.iter().all(|p| p.weight == 0) {
            return Err(SamplerError::AllZero);
        }

        let names: Vec<String> = projects.iter().map(|p| p.name.clone()).collect();
        let weights: Vec<u32> = projects.iter().map(|p| p.weight).collect();
        let index = WeightedIndex::new(&weights)?;

        Ok(Self {
            names,
            weights,
            index,
        })
    }

    /// Draws one project name.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[self.index.sample(rng)]
    }

    /// Probability of drawing `name`, or `None` if it is not in the set.
    ///
    /// Duplicate names are summed.
    pub fn probability(&self, name: &str) -> Option<f64> {
        let total: u64 = self.weights.iter().map(|&w| u64::from(w)).sum();
        let mut found = false;
        let mut weight: u64 = 0;
        for (n, &w) in self.names.iter().zip(&self.weights) {
            if n == name {
                found = true;
                weight += u64::from(w);
            }
        }
        found.then(|| weight as f64 / total as f64)
    }

    /// Project names in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the project set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_rejected() {
        let err = WeightedSampler::new(&[]).unwrap_err();
        assert!(matches!(err, SamplerError::Empty));
    }

    #[test]
    fn test_all_zero_rejected() {
        let projects = vec![ProjectWeight::new("A", 0), ProjectWeight::new("B", 0)];
        let err = WeightedSampler::new(&projects).unwrap_err();
        assert!(matches!(err, SamplerError::AllZero));
    }

    #[test]
    fn test_overflowing_weights_rejected() {
        let projects = vec![
            ProjectWeight::new("A", u32::MAX),
            ProjectWeight::new("B", u32::MAX),
        ];
        let err = WeightedSampler::new(&projects).unwrap_err();
        assert!(matches!(err, SamplerError::Invalid(_)));
    }

    #[test]
    fn test_single_project_always_drawn() {
        let sampler = WeightedSampler::new(&[ProjectWeight::new("Solo", 5)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), "Solo");
        }
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let projects = vec![ProjectWeight::new("Never", 0), ProjectWeight::new("Always", 2)];
        let sampler = WeightedSampler::new(&projects).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..500 {
            assert_eq!(sampler.sample(&mut rng), "Always");
        }
    }

    #[test]
    fn test_frequency_converges_to_weights() {
        let projects = vec![ProjectWeight::new("A", 1), ProjectWeight::new("B", 3)];
        let sampler = WeightedSampler::new(&projects).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let n = 20_000;
        let b_count = (0..n).filter(|_| sampler.sample(&mut rng) == "B").count();
        let freq = b_count as f64 / n as f64;

        // 4 sigma for p=0.75, n=20k is about 0.012
        assert!((freq - 0.75).abs() < 0.02, "B frequency was {freq}");
    }

    #[test]
    fn test_same_seed_same_draws() {
        let projects = vec![
            ProjectWeight::new("A", 2),
            ProjectWeight::new("B", 5),
            ProjectWeight::new("C", 1),
        ];
        let sampler = WeightedSampler::new(&projects).unwrap();

        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let a: Vec<&str> = (0..50).map(|_| sampler.sample(&mut rng1)).collect();
        let b: Vec<&str> = (0..50).map(|_| sampler.sample(&mut rng2)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability() {
        let projects = vec![ProjectWeight::new("A", 1), ProjectWeight::new("B", 3)];
        let sampler = WeightedSampler::new(&projects).unwrap();
        assert!((sampler.probability("B").unwrap() - 0.75).abs() < 1e-10);
        assert!((sampler.probability("A").unwrap() - 0.25).abs() < 1e-10);
        assert_eq!(sampler.probability("Z"), None);
        assert_eq!(sampler.len(), 2);
        assert_eq!(sampler.names(), &["A".to_string(), "B".to_string()]);
    }
}
