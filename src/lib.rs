pub mod configuration;

pub mod math {
    pub mod integrand;
    pub mod trapezoid;
}

pub mod parallel {
    pub mod chunk;
    pub mod coordinatorerror;
    pub mod piestimate;
    pub mod coordinator;
}

pub mod report;

pub mod session;
