pub mod payment_type;
