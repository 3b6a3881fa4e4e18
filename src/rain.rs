// Copyright (c) 2026 rezky_nightky

use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
};

use crate::buffer::IntensityBuffer;
use crate::droplet::{Droplet, MIN_LENGTH};

const RESPAWN_CHANCE: f32 = 0.002;

pub struct Rain {
    density: f32,
    buffer: IntensityBuffer,
    droplets: Vec<Droplet>,

    rng: StdRng,
    rand_chance: Uniform<f32>,
    rand_head: Uniform<f32>,
    rand_len: Uniform<u16>,
    rand_vel: Uniform<f32>,
}

impl Rain {
    pub fn new(density: f32, rng: StdRng) -> Self {
        Self {
            density,
            buffer: IntensityBuffer::new(0, 0),
            droplets: Vec::new(),
            rng,
            rand_chance: Uniform::new(0.0, 1.0).expect("valid range"),
            rand_head: Uniform::new(0.0, 1.0).expect("valid range"),
            rand_len: Uniform::new(MIN_LENGTH, MIN_LENGTH + 1).expect("valid range"),
            rand_vel: Uniform::new(0.5, 1.0).expect("valid range"),
        }
    }

    pub fn buffer(&self) -> &IntensityBuffer {
        &self.buffer
    }

    #[allow(dead_code)]
    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }

    // Hard reset at a (new) terminal size: fresh buffer, fresh draw ranges,
    // and a reseeded column set. Density applies here and nowhere else.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);

        let max_head = height.max(1) as f32;
        let max_len = MIN_LENGTH + (height / 2).max(1);
        self.rand_head = Uniform::new(0.0, max_head).expect("valid range");
        self.rand_len = Uniform::new(MIN_LENGTH, max_len).expect("valid range");

        self.droplets.clear();
        for _ in 0..width {
            let d = if self.rand_chance.sample(&mut self.rng) < self.density {
                self.spawn_droplet()
            } else {
                Droplet::dormant()
            };
            self.droplets.push(d);
        }
    }

    fn spawn_droplet(&mut self) -> Droplet {
        Droplet {
            head: self.rand_head.sample(&mut self.rng),
            length: self.rand_len.sample(&mut self.rng),
            vel: self.rand_vel.sample(&mut self.rng),
            falling: true,
        }
    }

    // One tick: fade everything, then let each column either roll for a
    // respawn (dormant) or advance and repaint its streak (falling).
    pub fn tick(&mut self) {
        self.buffer.decay();

        for col in 0..self.droplets.len() {
            if self.droplets[col].falling {
                self.droplets[col].advance(col as u16, &mut self.buffer);
            } else if self.rand_chance.sample(&mut self.rng) < RESPAWN_CHANCE {
                self.droplets[col] = self.spawn_droplet();
            }
        }
    }
}
