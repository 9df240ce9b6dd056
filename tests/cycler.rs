mod tests {
    use embassy_time::{Duration, Instant};
    use rib_cage_composer::palette::presets::DEFAULT_ROTATION;
    use rib_cage_composer::{
        CyclerConfig, Error, GradientPalette, GradientStop, PaletteCycler, Rgb,
    };

    static DARK: GradientPalette = GradientPalette {
        name: "dark",
        stops: &[GradientStop::new(0, 0, 0, 0), GradientStop::new(255, 0, 0, 0)],
    };
    static LIGHT: GradientPalette = GradientPalette {
        name: "light",
        stops: &[
            GradientStop::new(0, 255, 255, 255),
            GradientStop::new(255, 255, 255, 255),
        ],
    };

    fn default_cycler() -> PaletteCycler<8> {
        PaletteCycler::new(&DEFAULT_ROTATION, &CyclerConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_on_first_palette() {
        let cycler = default_cycler();
        assert_eq!(cycler.len(), 5);
        assert_eq!(cycler.cursor(), None);
        assert_eq!(cycler.current(), cycler.palette(0).unwrap());
        assert_eq!(cycler.target(), cycler.palette(0).unwrap());
        assert!(!cycler.is_blending());
    }

    #[test]
    fn test_next_palette_round_robin() {
        let mut cycler = default_cycler();
        assert_eq!(cycler.set_next_palette(), 0);
        assert_eq!(cycler.target(), cycler.palette(0).unwrap());
        for expected in 1..5 {
            assert_eq!(cycler.set_next_palette(), expected);
        }
        assert_eq!(cycler.set_next_palette(), 0);
        assert_eq!(cycler.target(), cycler.palette(0).unwrap());
        // Switching only moves the target
        assert_eq!(cycler.current(), cycler.palette(0).unwrap());
    }

    #[test]
    fn test_set_current_palette() {
        let mut cycler = default_cycler();
        cycler.set_next_palette();
        cycler.set_next_palette();

        cycler.set_current_palette(3).unwrap();
        assert_eq!(cycler.current(), cycler.palette(3).unwrap());
        assert_eq!(cycler.target(), cycler.palette(3).unwrap());
        assert!(!cycler.is_blending());
        assert_eq!(cycler.cursor(), Some(1));

        assert_eq!(cycler.set_current_palette(5), Err(Error::PaletteOutOfRange(5)));
    }

    #[test]
    fn test_blend_step_moves_at_most_step() {
        let mut cycler: PaletteCycler<2> =
            PaletteCycler::new(&[&DARK, &LIGHT], &CyclerConfig::default()).unwrap();
        cycler.set_next_palette();
        cycler.set_next_palette();
        assert!(cycler.is_blending());

        assert!(cycler.blend_step());
        for entry in cycler.current().entries() {
            assert_eq!(*entry, Rgb::new(12, 12, 12));
        }

        let mut steps = 1;
        while cycler.blend_step() {
            steps += 1;
        }
        assert_eq!(steps, 22);
        assert_eq!(cycler.current(), cycler.target());
        assert!(!cycler.blend_step());
    }

    #[test]
    fn test_cycle_is_time_gated() {
        let mut cycler = default_cycler();
        cycler.cycle(Instant::from_millis(0));
        assert_eq!(cycler.cursor(), None);

        cycler.cycle(Instant::from_millis(9_999));
        assert_eq!(cycler.cursor(), None);

        cycler.cycle(Instant::from_millis(10_000));
        assert_eq!(cycler.cursor(), Some(0));

        cycler.cycle(Instant::from_millis(20_000));
        assert_eq!(cycler.cursor(), Some(1));
        assert_eq!(cycler.target(), cycler.palette(1).unwrap());
        assert!(cycler.is_blending());

        let current = *cycler.current();
        for _ in 0..10 {
            cycler.cycle(Instant::from_millis(20_000));
        }
        assert_eq!(cycler.cursor(), Some(1));
        assert_eq!(*cycler.current(), current);

        cycler.cycle(Instant::from_millis(20_009));
        assert_eq!(*cycler.current(), current);

        cycler.cycle(Instant::from_millis(20_010));
        assert_ne!(*cycler.current(), current);
    }

    #[test]
    fn test_custom_cadence() {
        let config = CyclerConfig {
            palette_interval: Duration::from_millis(100),
            blend_interval: Duration::from_millis(1),
            blend_step: 255,
        };
        let mut cycler: PaletteCycler<2> = PaletteCycler::new(&[&DARK, &LIGHT], &config).unwrap();
        cycler.cycle(Instant::from_millis(0));
        cycler.cycle(Instant::from_millis(100));
        cycler.cycle(Instant::from_millis(200));
        assert_eq!(cycler.cursor(), Some(1));
        // A full-range step lands on the target at once
        assert!(!cycler.is_blending());
    }

    #[test]
    fn test_new_errors() {
        let config = CyclerConfig::default();
        assert_eq!(
            PaletteCycler::<4>::new(&[], &config).map(|cycler| cycler.len()),
            Err(Error::NoPalettes)
        );
        assert_eq!(
            PaletteCycler::<4>::new(&DEFAULT_ROTATION, &config).map(|cycler| cycler.len()),
            Err(Error::TooManyPalettes { max: 4 })
        );
    }
}
