use rand::Rng;

use crate::{models::Board, utils::letters::get_cumulative_distribution};

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a `size` x `size` board with weighted letter distribution
    pub fn generate(size: usize) -> Board {
        let mut rng = rand::rng();
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().unwrap().1;

        let mut cells = Vec::with_capacity(size);

        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                row.push(Self::random_letter(&cumulative_dist, total, &mut rng));
            }
            cells.push(row);
        }

        Board::new(cells)
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}
