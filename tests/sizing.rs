//! 사이징 엔진 회귀 테스트.
use water_treatment_calculator::fields::Field;
use water_treatment_calculator::inputs::PlantInputs;
use water_treatment_calculator::sizing::{self, equipment};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn reference_inputs() -> PlantInputs {
    PlantInputs {
        apartments: 500.0,
        people_per_apartment: 3.0,
        liters_per_person_day: 180.0,
        occupancy: 0.95,
        peak_hour_factor: 2.2,
        safety_factor: 1.15,
        nf_module_m3_per_h: 1.0,
        ..PlantInputs::default()
    }
}

#[test]
fn reference_scenario_flow_chain() {
    let r = sizing::compute(&reference_inputs());
    let d = &r.demand;
    assert!(close(d.population, 1425.0), "population={}", d.population);
    assert!(close(d.daily_m3, 256.5), "daily={}", d.daily_m3);
    assert!(close(d.avg_hourly_m3, 10.6875), "avg={}", d.avg_hourly_m3);
    assert!(close(d.peak_hourly_m3, 23.5125), "peak={}", d.peak_hourly_m3);
    assert!(close(d.required_m3_per_h, 27.039375), "req={}", d.required_m3_per_h);
    assert!(close(d.required_l_per_h, 27_039.375), "lph={}", d.required_l_per_h);
}

#[test]
fn reference_scenario_equipment_counts() {
    let r = sizing::compute(&reference_inputs());
    assert_eq!(r.equipment.nf_modules, 28);
    assert_eq!(r.equipment.uf_blocks, 3);
    assert_eq!(r.equipment.uv_units, 3);
    assert_eq!(r.equipment.pumps, 3);
    assert_eq!(r.equipment.carbon_columns, 14);
}

#[test]
fn required_flow_matches_closed_form() {
    let mut inputs = reference_inputs();
    inputs.apartments = 137.0;
    inputs.people_per_apartment = 2.4;
    inputs.liters_per_person_day = 210.0;
    inputs.occupancy = 0.8;
    inputs.peak_hour_factor = 3.1;
    inputs.safety_factor = 1.4;
    let expected = 137.0 * 2.4 * 0.8 * 210.0 / 1000.0 / 24.0 * 3.1 * 1.4;
    let r = sizing::compute(&inputs);
    assert!(close(r.demand.required_m3_per_h, expected));
}

#[test]
fn zero_demand_leaves_only_redundant_units() {
    let mut inputs = reference_inputs();
    inputs.apartments = 0.0;
    let r = sizing::compute(&inputs);
    assert_eq!(r.demand.population, 0.0);
    assert_eq!(r.demand.required_m3_per_h, 0.0);
    assert_eq!(r.equipment.nf_modules, 0);
    assert_eq!(r.equipment.uf_blocks, 0);
    assert_eq!(r.equipment.carbon_columns, 0);
    assert_eq!(r.equipment.uv_units, 2);
    assert_eq!(r.equipment.pumps, 2);

    inputs.n_plus_one = false;
    let r = sizing::compute(&inputs);
    assert_eq!(r.equipment.uv_units, 0);
    assert_eq!(r.equipment.pumps, 0);
}

#[test]
fn n_plus_one_only_raises_small_counts() {
    let mut inputs = reference_inputs();
    inputs.apartments = 100.0; // ≈ 5.4 m³/h
    inputs.n_plus_one = false;
    let without = sizing::compute(&inputs);
    assert_eq!(without.equipment.uv_units, 1);
    assert_eq!(without.equipment.pumps, 1);

    inputs.n_plus_one = true;
    let with = sizing::compute(&inputs);
    assert_eq!(with.equipment.uv_units, 2);
    assert_eq!(with.equipment.pumps, 2);
    assert_eq!(with.equipment.nf_modules, without.equipment.nf_modules);

    // 수요가 충분히 크면 N+1은 대수를 바꾸지 않는다
    let big = sizing::compute(&reference_inputs());
    let mut big_inputs = reference_inputs();
    big_inputs.n_plus_one = false;
    assert_eq!(big.equipment, sizing::compute(&big_inputs).equipment);
}

#[test]
fn counts_are_ceiling_and_monotonic() {
    let mut prev = equipment::size_equipment(0.0, 1.0, false);
    let mut flow = 0.0;
    while flow < 60.0 {
        flow += 0.37;
        let c = equipment::size_equipment(flow, 3.0, false);
        assert_eq!(c.nf_modules, (flow / 3.0).ceil() as u64);
        assert_eq!(c.uf_blocks, (flow / 10.0).ceil() as u64);
        assert_eq!(c.carbon_columns, (flow / 2.0).ceil() as u64);
        assert!(c.nf_modules >= prev.nf_modules);
        assert!(c.uf_blocks >= prev.uf_blocks);
        assert!(c.uv_units >= prev.uv_units);
        assert!(c.pumps >= prev.pumps);
        assert!(c.carbon_columns >= prev.carbon_columns);
        prev = c;
    }
}

#[test]
fn capex_matches_itemised_sum() {
    let inputs = reference_inputs();
    let r = sizing::compute(&inputs);
    let p = &inputs.prices;
    let q = &inputs.quantities;
    let expected = p.nf * 28.0
        + p.uf * 3.0
        + p.uv * 3.0
        + p.pump * 3.0
        + p.carbon * 14.0
        + p.mineralizer
        + p.tank * q.tanks
        + p.stainless_per_m * q.stainless_m
        + p.pex_per_m * q.pex_m
        + p.plc
        + p.installation
        + p.room_per_m2 * q.room_m2
        + p.design;
    assert_eq!(r.capex.total, expected);
    assert_eq!(r.capex.lines.len(), 13);
}

#[test]
fn capex_is_linear_in_each_unit_price() {
    let base = reference_inputs();
    let r0 = sizing::compute(&base);
    let price_fields: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| f.store_key() == "prices")
        .collect();
    assert_eq!(price_fields.len(), r0.capex.lines.len());

    for (field, line) in price_fields.iter().zip(&r0.capex.lines) {
        assert_eq!(line.unit_price, field.get(&base), "{}", field.key());
        for bump in [1000.0, 2000.0] {
            let mut bumped = base;
            field.set(&mut bumped, field.get(&base) + bump);
            let r = sizing::compute(&bumped);
            assert_eq!(r0.equipment, r.equipment, "{}", field.key());
            let delta = r.capex.total - r0.capex.total;
            assert!(
                close(delta, bump * line.quantity),
                "{}: delta={delta} quantity={}",
                field.key(),
                line.quantity
            );
        }
    }
}

#[test]
fn opex_year_one_components() {
    let inputs = reference_inputs();
    let r = sizing::compute(&inputs);
    let annual = r.demand.required_m3_per_h * 24.0 * 365.0 * 0.35;
    assert!(close(r.opex.annual_m3, annual));
    let y1 = &r.opex.years[0];
    assert_eq!(y1.year, 1);
    assert!(close(y1.energy, 0.6 * annual));
    assert!(close(y1.reagents, 0.4 * annual));
    assert!(close(y1.membranes, 20_000.0 * 28.0 / 3.0));
    assert_eq!(y1.service, 120_000.0);
    assert!(close(y1.total, y1.energy + y1.reagents + y1.membranes + y1.service));
}

#[test]
fn opex_compounds_without_service_fee() {
    let inputs = reference_inputs();
    let r = sizing::compute(&inputs);
    let years = &r.opex.years;
    for n in 1..years.len() {
        let prev = &years[n - 1];
        let cur = &years[n];
        assert_eq!(cur.year as usize, n + 1);
        assert!(close(cur.energy, prev.energy * 1.03));
        assert!(close(cur.reagents, prev.reagents * 1.03));
        assert!(close(cur.membranes, prev.membranes * 1.03));
        assert_eq!(cur.service, 0.0);
        assert!(close(cur.total, cur.energy + cur.reagents + cur.membranes));
    }
}

#[test]
fn zero_inflation_keeps_variable_costs_flat() {
    let mut inputs = reference_inputs();
    inputs.opex.inflation_pct = 0.0;
    let r = sizing::compute(&inputs);
    let y1 = &r.opex.years[0];
    for y in &r.opex.years[1..] {
        assert_eq!(y.total, y1.energy + y1.reagents + y1.membranes);
    }
}

#[test]
fn tco_is_capex_plus_five_year_opex() {
    let r = sizing::compute(&reference_inputs());
    let yearly = r.yearly_opex();
    let sum: f64 = yearly.iter().sum();
    assert!(close(r.opex.total, sum));
    assert_eq!(r.tco, r.capex.total + r.opex.total);
}

#[test]
fn recompute_is_bit_identical() {
    let inputs = reference_inputs();
    let a = sizing::compute(&inputs);
    let b = sizing::compute(&inputs);
    assert_eq!(a, b);
    assert_eq!(a.tco.to_bits(), b.tco.to_bits());
}

#[test]
fn defaults_match_reference_scenario() {
    assert_eq!(
        sizing::compute(&PlantInputs::default()),
        sizing::compute(&reference_inputs())
    );
}
