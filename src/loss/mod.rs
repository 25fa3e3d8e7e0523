mod hamming;
mod loss_fn;
mod zero_one;

pub use hamming::HammingLoss;
pub use loss_fn::Loss;
pub use zero_one::ZeroOneLoss;
