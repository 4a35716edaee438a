use keyspread::{distribute, plot, write_plot, write_plot_with, Distribution, PlotOptions};

fn rendered(dist: &Distribution) -> String {
    let mut out = Vec::new();
    write_plot(&mut out, dist).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_basic_lines() {
    let dist = Distribution::from_counts(vec![3, 1, 0, 2]).unwrap();
    let expected = "\
0 ### (3)
1 #   (1)
2     (0)
3 ##  (2)
";
    assert_eq!(rendered(&dist), expected);
}

#[test]
fn test_all_zero_distribution() {
    let dist = Distribution::from_counts(vec![0, 0, 0]).unwrap();
    let output = rendered(&dist);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.ends_with("(0)"));
    }
}

#[test]
fn test_empty_key_sequence_plots_n_lines() {
    let keys: [&str; 0] = [];
    let dist = distribute(&keys, 5).unwrap();
    let output = rendered(&dist);

    assert_eq!(output.lines().count(), 5);
    assert_eq!(dist.total(), 0);
    for line in output.lines() {
        assert!(line.ends_with("(0)"));
    }
}

#[test]
fn test_index_column_alignment() {
    let dist = Distribution::from_counts(vec![1; 11]).unwrap();
    let output = rendered(&dist);

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with(" 0 "));
    assert!(lines[9].starts_with(" 9 "));
    assert!(lines[10].starts_with("10 "));
}

#[test]
fn test_counts_line_up() {
    let dist = Distribution::from_counts(vec![5, 0, 12, 3]).unwrap();
    let output = rendered(&dist);

    let columns: Vec<usize> = output
        .lines()
        .map(|line| line.find('(').unwrap())
        .collect();
    assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_bars_scale_down() {
    let dist = Distribution::from_counts(vec![120, 60, 0]).unwrap();
    let output = rendered(&dist);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0].matches('#').count(), 60);
    assert_eq!(lines[1].matches('#').count(), 30);
    assert_eq!(lines[2].matches('#').count(), 0);
    // The literal counts are untouched by scaling.
    assert!(lines[0].ends_with("(120)"));
    assert!(lines[1].ends_with("(60)"));
}

#[test]
fn test_scaling_rounds_down() {
    let dist = Distribution::from_counts(vec![100, 9, 55]).unwrap();
    let options = PlotOptions {
        max_bar_width: 10,
        glyph: '*',
    };

    let mut out = Vec::new();
    write_plot_with(&mut out, &dist, &options).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0].matches('*').count(), 10);
    // 9 * 10 / 100 rounds down to an empty bar; the count still shows.
    assert_eq!(lines[1].matches('*').count(), 0);
    assert!(lines[1].ends_with("(9)"));
    assert_eq!(lines[2].matches('*').count(), 5);
}

#[test]
fn test_no_scaling_at_exact_width() {
    let dist = Distribution::from_counts(vec![10, 4]).unwrap();
    let options = PlotOptions {
        max_bar_width: 10,
        glyph: '#',
    };

    let mut out = Vec::new();
    write_plot_with(&mut out, &dist, &options).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0].matches('#').count(), 10);
    assert_eq!(lines[1].matches('#').count(), 4);
}

#[test]
fn test_plot_yields_no_value() {
    // The return channel deliberately carries nothing.
    let dist = distribute(&["a", "b", "c"], 2).unwrap();
    let result: () = plot(&dist);
    #[allow(clippy::unit_cmp)]
    {
        assert_eq!(result, ());
    }
}
