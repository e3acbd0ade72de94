use tonerig_modal::{
    dsp::{units::pitch_to_freq, ResonatorBank, NUM_MODES},
    graph::{GraphNode, ModalNode, NodeExt, RenderCtx, StrikeNode},
    CvInputs, ModalModule, ModalParam, ModuleConfig,
};

fn rms(buffer: &[f32]) -> f32 {
    (buffer.iter().map(|x| x * x).sum::<f32>() / buffer.len() as f32).sqrt()
}

fn strike_bank(bank: &mut ResonatorBank, frames: usize, f0: f32, damping: f32, sr: f32) -> Vec<f32> {
    (0..frames)
        .map(|n| {
            let x = if n == 0 { 1.0 } else { 0.0 };
            bank.produce_sample(x, f0, damping, 0.0, sr)
        })
        .collect()
}

#[test]
fn impulse_at_440_rings_from_first_frame() {
    let mut bank = ResonatorBank::new();
    let out = strike_bank(&mut bank, 4_410, 440.0, 0.0, 44_100.0);

    assert!(out[0] != 0.0 && out[0].is_finite());
    assert!(out.iter().all(|x| x.is_finite()));
    // 20 x 440 Hz stays below the cutoff.
    assert_eq!(bank.active_modes(), NUM_MODES);
}

#[test]
fn impulse_decays_when_damped() {
    let sr = 48_000.0;
    let mut bank = ResonatorBank::new();
    let out = strike_bank(&mut bank, 2 * 48_000 + 4_800, 440.0, 8.0, sr);

    let early = rms(&out[..4_800]);
    let late = rms(&out[2 * 48_000..]);
    assert!(early > 0.0);
    assert!(late < early * 0.01, "early {} late {}", early, late);
}

#[test]
fn mode_at_cutoff_ends_the_bank() {
    let mut bank = ResonatorBank::new();
    bank.produce_sample(1.0, 5_000.0, 0.5, 0.0, 48_000.0);

    // 5, 10, 15 kHz ring; 20 kHz is exactly the cutoff.
    assert_eq!(bank.active_modes(), 3);
    assert_eq!(bank.modes()[3].inverse_mass(), 0.0);
}

#[test]
fn module_output_is_five_times_bank_sum() {
    let sr = 48_000.0;
    let mut module = ModalModule::new(ModuleConfig::default().with_sample_rate(sr));
    module.set_knob(ModalParam::Damping, 1.0);
    let mut bank = ResonatorBank::new();
    let f0 = pitch_to_freq(60.0);
    let cv = CvInputs::default();

    for n in 0..2_048 {
        let x = if n == 0 { 1.0 } else { 0.0 };
        let volts = module.process(x, &cv);
        let raw = bank.produce_sample(x, f0, 1.0, 0.0, sr);
        assert_eq!(volts, 5.0 * raw, "frame {}", n);
    }
}

#[test]
fn same_seed_renders_identically() {
    let render = |seed: u32| {
        let mut module = ModalModule::new(ModuleConfig::default().with_seed(seed));
        module.set_knob(ModalParam::Inharmonicity, 0.7);
        let mut input = vec![0.0; 1_024];
        input[0] = 10.0;
        let mut out = vec![0.0; 1_024];
        module.process_block(&input, &CvInputs::default(), &mut out);
        out
    };

    assert_eq!(render(42), render(42));
    assert_ne!(render(42), render(7));
}

#[test]
fn silence_in_silence_out() {
    let mut module = ModalModule::new(ModuleConfig::default());
    let cv = CvInputs {
        pitch: 2.0,
        damping: 1.0,
        inharmonicity: -3.0,
    };
    let input = vec![0.0; 4_096];
    let mut out = vec![1.0; 4_096];
    module.process_block(&input, &cv, &mut out);
    assert!(out.iter().all(|&x| x == 0.0));
}

#[test]
fn sample_rate_change_mid_ring_stays_finite() {
    let mut module = ModalModule::new(ModuleConfig::default().with_sample_rate(44_100.0));
    let cv = CvInputs::default();
    let mut out = Vec::new();

    out.push(module.process(10.0, &cv));
    for _ in 0..1_000 {
        out.push(module.process(0.0, &cv));
    }
    module.set_sample_rate(96_000.0);
    for _ in 0..1_000 {
        out.push(module.process(0.0, &cv));
    }

    assert!(out.iter().all(|x| x.is_finite()));
    assert!(out[1_001..].iter().any(|&x| x != 0.0));
}

#[test]
fn struck_graph_voice_goes_quiet() {
    let mut voice = StrikeNode::impulse()
        .with_gain(10.0)
        .through(ModalNode::new().with_damping(9.0));
    let ctx = RenderCtx::from_note(48_000.0, 69, 127.0);
    voice.note_on(&ctx);

    let mut block = vec![0.0; 512];
    voice.render_block(&mut block, &ctx);
    assert!(block.iter().any(|&x| x != 0.0));

    for _ in 0..2_000 {
        if !voice.is_active() {
            break;
        }
        voice.render_block(&mut block, &ctx);
    }
    assert!(!voice.is_active(), "voice should fall below the decay floor");
}

#[test]
fn pitch_reference_points() {
    assert!((pitch_to_freq(69.0) - 440.0).abs() < 1e-3);
    assert!((pitch_to_freq(60.0) - 261.6256).abs() < 1e-2);
    assert!((pitch_to_freq(81.0) - 880.0).abs() < 1e-2);
}
