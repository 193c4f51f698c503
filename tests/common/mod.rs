pub mod synthetic_spectrogram;
