ocpp_enum! {
    pub enum UnitOfMeasure {
        Wh = "Wh",
        KWh = "kWh",
        Varh = "varh",
        Kvarh = "kvarh",
        W = "W",
        Kw = "kW",
        Va = "VA",
        Kva = "kVA",
        Var = "var",
        Kvar = "kvar",
        A = "A",
        V = "V",
        Celsius = "Celsius",
        Fahrenheit = "Fahrenheit",
        K = "K",
        Percent = "Percent",
    }
}
