use crate::engines::generation::genome::Chromosome;
use rand::seq::index;
use rand::Rng;

/// Draw `tournament_size` distinct indices from `0..population_size`, in sampling order
pub fn sample_tournament<R: Rng>(
    population_size: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    let amount = tournament_size.min(population_size);
    index::sample(rng, population_size, amount).into_vec()
}

/// Index of the fittest candidate; the earliest sampled wins ties
pub fn tournament_winner(fitness: &[f64], candidates: &[usize]) -> usize {
    let mut winner = candidates.first().copied().unwrap_or(0);
    for &idx in candidates.iter().skip(1) {
        if fitness[winner] < fitness[idx] {
            winner = idx;
        }
    }
    winner
}

/// Tournament selection: pick best of K distinct random candidates
pub fn tournament_selection<R: Rng>(
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    let candidates = sample_tournament(fitness.len(), tournament_size, rng);
    tournament_winner(fitness, &candidates)
}

/// Copy of `parent` with the bits at both points complemented.
///
/// When the points coincide the bit is flipped once.
pub fn mutate_at(parent: &Chromosome, point1: usize, point2: usize) -> Chromosome {
    let mut offspring = parent.clone();
    offspring.flip(point1);
    if point2 != point1 {
        offspring.flip(point2);
    }
    offspring
}

/// Two-point mutation with points drawn independently over the whole chromosome
pub fn mutate<R: Rng>(parent: &Chromosome, rng: &mut R) -> Chromosome {
    let point1 = rng.gen_range(0..parent.len());
    let point2 = rng.gen_range(0..parent.len());
    mutate_at(parent, point1, point2)
}

/// Swap the bits in `start..end` between the parents.
///
/// The first child keeps `parent1` outside the region and takes `parent2`
/// inside it; the second child is its complement.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    start: usize,
    end: usize,
) -> (Chromosome, Chromosome) {
    let len = parent1.len().min(parent2.len());
    let (mut child1, mut child2) = (Vec::with_capacity(len), Vec::with_capacity(len));

    for i in 0..len {
        if (start..end).contains(&i) {
            child1.push(parent2[i]);
            child2.push(parent1[i]);
        } else {
            child1.push(parent1[i]);
            child2.push(parent2[i]);
        }
    }

    (Chromosome::new(child1), Chromosome::new(child2))
}

/// Two-point crossover: `start` falls in the first half of the chromosome,
/// `end` is redrawn until it lies beyond `start`.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let len = parent1.len().min(parent2.len());
    if len < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let start = rng.gen_range(0..len / 2);
    let mut end = rng.gen_range(0..len);
    while end <= start {
        end = rng.gen_range(0..len);
    }

    crossover_at(parent1, parent2, start, end)
}

/// Generate random chromosome with every bit drawn uniformly
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Chromosome {
    Chromosome::new((0..length).map(|_| rng.gen_bool(0.5)).collect())
}
