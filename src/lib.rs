pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod quadrature {
        pub mod integrationerror;
        pub mod panelrule;
        pub mod breakpoints;
        pub mod integrationreport;
        pub mod adaptiveintegrator;
        pub mod stepgrid;
        pub mod compositeintegrator;

        pub mod monitor {
            pub mod integrationmonitor;
            pub mod noopmonitor;
            pub mod logmonitor;
            pub mod iterationlimitmonitor;
            pub mod timelimitmonitor;
            pub mod compositemonitor;
        }
    }
}
