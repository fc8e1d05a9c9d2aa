// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};
use rand::prelude::*;

// Draws come off the end. Tiles are rack tiles, so a designated blank is
// only ever counted as the blank.
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    pub fn draw(&mut self, n: usize) -> error::Returns<Vec<u8>> {
        if n > self.0.len() {
            return Err(error::Error::BagUnderflow {
                requested: n,
                remaining: self.0.len(),
            });
        }
        Ok(self.draw_at_most(n))
    }

    pub fn draw_at_most(&mut self, n: usize) -> Vec<u8> {
        let keep = self.0.len().saturating_sub(n);
        let mut drawn = self.0.split_off(keep);
        drawn.reverse();
        drawn
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        let wanted = rack_size.saturating_sub(rack.len());
        rack.extend(self.draw_at_most(wanted));
    }

    // put back the tiles in random order. keep the rest of the bag in the same order.
    pub fn put_back(&mut self, mut rng: &mut dyn RngCore, tiles: &[u8]) {
        let mut num_new_tiles = tiles.len();
        match num_new_tiles {
            0 => {
                return;
            }
            1 => {
                self.0.insert(
                    rng.random_range(0..self.0.len() + 1),
                    alphabet::to_rack_tile(tiles[0]),
                );
                return;
            }
            _ => {}
        }
        let mut num_old_tiles = self.0.len();
        let new_len = num_new_tiles + num_old_tiles;
        self.0.reserve(num_new_tiles + new_len); // cap = old+(new+old)+new
        self.0.resize(new_len + num_old_tiles, 0); // [old,0,0]
        let mut p_old_tiles = new_len; // after old+new
        self.0.copy_within(0..num_old_tiles, p_old_tiles); // [old,0,old]
        let mut p_new_tiles = self.0.len(); // after old+new+old
        self.0
            .extend(tiles.iter().map(|&tile| alphabet::to_rack_tile(tile))); // [old,0,old,new]
        self.0[p_new_tiles..].shuffle(&mut rng);
        for wp in 0..new_len {
            if if num_new_tiles == 0 {
                true
            } else if num_old_tiles == 0 {
                false
            } else {
                rng.random_range(0..num_old_tiles + num_new_tiles) < num_old_tiles
            } {
                self.0[wp] = self.0[p_old_tiles];
                p_old_tiles += 1;
                num_old_tiles -= 1;
            } else {
                self.0[wp] = self.0[p_new_tiles];
                p_new_tiles += 1;
                num_new_tiles -= 1;
            }
        }
        self.0.truncate(new_len);
    }

    // draws first, so the returned tiles are never the ones put back.
    pub fn exchange(&mut self, rng: &mut dyn RngCore, tiles: &[u8]) -> error::Returns<Vec<u8>> {
        let drawn = self.draw(tiles.len())?;
        self.put_back(rng, tiles);
        Ok(drawn)
    }

    fn tally(tiles: &[u8]) -> [u16; 0x80] {
        let mut tally = [0u16; 0x80];
        for &tile in tiles {
            tally[alphabet::to_rack_tile(tile) as usize] += 1;
        }
        tally
    }

    pub fn has_tiles(&self, tiles: &[u8]) -> bool {
        let wanted = Self::tally(tiles);
        let have = Self::tally(&self.0);
        wanted.iter().zip(have.iter()).all(|(w, h)| w <= h)
    }

    pub fn remove_tiles(&mut self, tiles: &[u8]) -> error::Returns<()> {
        if !self.has_tiles(tiles) {
            return Err(error::Error::TilesNotInBag(format!("{:?}", tiles)));
        }
        for &tile in tiles {
            let tile = alphabet::to_rack_tile(tile);
            if let Some(pos) = self.0.iter().rposition(|&t| t == tile) {
                self.0.remove(pos);
            }
        }
        tracing::debug!(removed = tiles.len(), remaining = self.0.len(), "removed tiles from bag");
        Ok(())
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_bag_holds_the_distribution() {
        let alphabet = alphabet::make_english_alphabet();
        let bag = Bag::new(&alphabet);
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.0.iter().filter(|&&t| t == alphabet::BLANK).count(), 2);
        assert_eq!(bag.0.iter().filter(|&&t| t == 5).count(), 12);
    }

    #[test]
    fn draw_fails_past_the_end() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        assert_eq!(bag.draw(98).unwrap().len(), 98);
        assert!(matches!(
            bag.draw(3),
            Err(error::Error::BagUnderflow {
                requested: 3,
                remaining: 2
            })
        ));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.draw_at_most(3).len(), 2);
        assert!(bag.is_empty());
    }

    #[test]
    fn replenish_tops_up_the_rack() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        let mut rack = vec![1, 2];
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 95);
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
    }

    #[test]
    fn put_back_keeps_old_order_and_normalizes_blanks() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        let mut bag = Bag(vec![1, 2, 3, 4]);
        bag.put_back(&mut rng, &[0x85, 6, 7]);
        assert_eq!(bag.len(), 7);
        let old: Vec<u8> = bag.0.iter().copied().filter(|&t| (1..=4).contains(&t)).collect();
        assert_eq!(old, vec![1, 2, 3, 4]);
        assert!(bag.has_tiles(&[alphabet::BLANK, 6, 7]));
        assert!(!bag.0.contains(&0x85));
    }

    #[test]
    fn remove_tiles_counts_blanked_as_blank() {
        let mut bag = Bag(vec![0, 1, 1, 2]);
        assert!(bag.has_tiles(&[0x83]));
        assert!(!bag.has_tiles(&[2, 2]));
        assert!(matches!(
            bag.remove_tiles(&[2, 2]),
            Err(error::Error::TilesNotInBag(_))
        ));
        assert_eq!(bag.len(), 4);
        bag.remove_tiles(&[0x83, 1]).unwrap();
        assert_eq!(bag.0, vec![1, 2]);
    }

    #[test]
    fn exchange_swaps_equal_counts() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        let mut bag = Bag(vec![1, 1, 1]);
        let drawn = bag.exchange(&mut rng, &[9, 9]).unwrap();
        assert_eq!(drawn, vec![1, 1]);
        assert_eq!(bag.len(), 3);
        assert!(bag.has_tiles(&[1, 9, 9]));
        assert!(bag.exchange(&mut rng, &[2, 2, 2, 2]).is_err());
    }
}
