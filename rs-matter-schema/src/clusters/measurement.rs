/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Measurement and sensing clusters.

clusters! {
    IlluminanceMeasurement = 0x0400 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => Tolerance,
            0x0004 => LightSensorType,
        }
        events {}
        commands {}
    }

    TemperatureMeasurement = 0x0402 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => Tolerance,
        }
        events {}
        commands {}
    }

    PressureMeasurement = 0x0403 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => Tolerance,
            0x0010 => ScaledValue,
            0x0011 => MinScaledValue,
            0x0012 => MaxScaledValue,
            0x0013 => ScaledTolerance,
            0x0014 => Scale,
        }
        events {}
        commands {}
    }

    FlowMeasurement = 0x0404 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => Tolerance,
        }
        events {}
        commands {}
    }

    RelativeHumidityMeasurement = 0x0405 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => Tolerance,
        }
        events {}
        commands {}
    }

    OccupancySensing = 0x0406 {
        attributes {
            0x0000 => Occupancy,
            0x0001 => OccupancySensorType,
            0x0002 => OccupancySensorTypeBitmap,
            0x0010 => PIROccupiedToUnoccupiedDelay,
            0x0011 => PIRUnoccupiedToOccupiedDelay,
            0x0012 => PIRUnoccupiedToOccupiedThreshold,
            0x0020 => UltrasonicOccupiedToUnoccupiedDelay,
            0x0021 => UltrasonicUnoccupiedToOccupiedDelay,
            0x0022 => UltrasonicUnoccupiedToOccupiedThreshold,
            0x0030 => PhysicalContactOccupiedToUnoccupiedDelay,
            0x0031 => PhysicalContactUnoccupiedToOccupiedDelay,
            0x0032 => PhysicalContactUnoccupiedToOccupiedThreshold,
        }
        events {}
        commands {}
    }

    CarbonMonoxideConcentrationMeasurement = 0x040C {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    CarbonDioxideConcentrationMeasurement = 0x040D {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    NitrogenDioxideConcentrationMeasurement = 0x0413 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    OzoneConcentrationMeasurement = 0x0415 {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    Pm25ConcentrationMeasurement = 0x042A {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    FormaldehydeConcentrationMeasurement = 0x042B {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    Pm1ConcentrationMeasurement = 0x042C {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    Pm10ConcentrationMeasurement = 0x042D {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    TotalVolatileOrganicCompoundsConcentrationMeasurement = 0x042E {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    RadonConcentrationMeasurement = 0x042F {
        attributes {
            0x0000 => MeasuredValue,
            0x0001 => MinMeasuredValue,
            0x0002 => MaxMeasuredValue,
            0x0003 => PeakMeasuredValue,
            0x0004 => PeakMeasuredValueWindow,
            0x0005 => AverageMeasuredValue,
            0x0006 => AverageMeasuredValueWindow,
            0x0007 => Uncertainty,
            0x0008 => MeasurementUnit,
            0x0009 => MeasurementMedium,
            0x000A => LevelValue,
        }
        events {}
        commands {}
    }

    ElectricalMeasurement = 0x0B04 {
        attributes {
            0x0000 => MeasurementType,
            0x0100 => DcVoltage,
            0x0101 => DcVoltageMin,
            0x0102 => DcVoltageMax,
            0x0103 => DcCurrent,
            0x0104 => DcCurrentMin,
            0x0105 => DcCurrentMax,
            0x0106 => DcPower,
            0x0107 => DcPowerMin,
            0x0108 => DcPowerMax,
            0x0200 => DcVoltageMultiplier,
            0x0201 => DcVoltageDivisor,
            0x0202 => DcCurrentMultiplier,
            0x0203 => DcCurrentDivisor,
            0x0204 => DcPowerMultiplier,
            0x0205 => DcPowerDivisor,
            0x0300 => AcFrequency,
            0x0301 => AcFrequencyMin,
            0x0302 => AcFrequencyMax,
            0x0303 => NeutralCurrent,
            0x0304 => TotalActivePower,
            0x0305 => TotalReactivePower,
            0x0306 => TotalApparentPower,
            0x0307 => Measured1stHarmonicCurrent,
            0x0308 => Measured3rdHarmonicCurrent,
            0x0309 => Measured5thHarmonicCurrent,
            0x030A => Measured7thHarmonicCurrent,
            0x030B => Measured9thHarmonicCurrent,
            0x030C => Measured11thHarmonicCurrent,
            0x030D => MeasuredPhase1stHarmonicCurrent,
            0x030E => MeasuredPhase3rdHarmonicCurrent,
            0x030F => MeasuredPhase5thHarmonicCurrent,
            0x0310 => MeasuredPhase7thHarmonicCurrent,
            0x0311 => MeasuredPhase9thHarmonicCurrent,
            0x0312 => MeasuredPhase11thHarmonicCurrent,
            0x0400 => AcFrequencyMultiplier,
            0x0401 => AcFrequencyDivisor,
            0x0402 => PowerMultiplier,
            0x0403 => PowerDivisor,
            0x0404 => HarmonicCurrentMultiplier,
            0x0405 => PhaseHarmonicCurrentMultiplier,
            0x0500 => InstantaneousVoltage,
            0x0501 => InstantaneousLineCurrent,
            0x0502 => InstantaneousActiveCurrent,
            0x0503 => InstantaneousReactiveCurrent,
            0x0504 => InstantaneousPower,
            0x0505 => RmsVoltage,
            0x0506 => RmsVoltageMin,
            0x0507 => RmsVoltageMax,
            0x0508 => RmsCurrent,
            0x0509 => RmsCurrentMin,
            0x050A => RmsCurrentMax,
            0x050B => ActivePower,
            0x050C => ActivePowerMin,
            0x050D => ActivePowerMax,
            0x050E => ReactivePower,
            0x050F => ApparentPower,
            0x0510 => PowerFactor,
            0x0511 => AverageRmsVoltageMeasurementPeriod,
            0x0512 => AverageRmsOverVoltageCounter,
            0x0513 => AverageRmsUnderVoltageCounter,
            0x0514 => RmsExtremeOverVoltagePeriod,
            0x0515 => RmsExtremeUnderVoltagePeriod,
            0x0516 => RmsVoltageSagPeriod,
            0x0517 => RmsVoltageSwellPeriod,
            0x0600 => AcVoltageMultiplier,
            0x0601 => AcVoltageDivisor,
            0x0602 => AcCurrentMultiplier,
            0x0603 => AcCurrentDivisor,
            0x0604 => AcPowerMultiplier,
            0x0605 => AcPowerDivisor,
            0x0700 => OverloadAlarmsMask,
            0x0701 => VoltageOverload,
            0x0702 => CurrentOverload,
            0x0800 => AcOverloadAlarmsMask,
            0x0801 => AcVoltageOverload,
            0x0802 => AcCurrentOverload,
            0x0803 => AcActivePowerOverload,
            0x0804 => AcReactivePowerOverload,
            0x0805 => AverageRmsOverVoltage,
            0x0806 => AverageRmsUnderVoltage,
            0x0807 => RmsExtremeOverVoltage,
            0x0808 => RmsExtremeUnderVoltage,
            0x0809 => RmsVoltageSag,
            0x080A => RmsVoltageSwell,
            0x0901 => LineCurrentPhaseB,
            0x0902 => ActiveCurrentPhaseB,
            0x0903 => ReactiveCurrentPhaseB,
            0x0905 => RmsVoltagePhaseB,
            0x0906 => RmsVoltageMinPhaseB,
            0x0907 => RmsVoltageMaxPhaseB,
            0x0908 => RmsCurrentPhaseB,
            0x0909 => RmsCurrentMinPhaseB,
            0x090A => RmsCurrentMaxPhaseB,
            0x090B => ActivePowerPhaseB,
            0x090C => ActivePowerMinPhaseB,
            0x090D => ActivePowerMaxPhaseB,
            0x090E => ReactivePowerPhaseB,
            0x090F => ApparentPowerPhaseB,
            0x0910 => PowerFactorPhaseB,
            0x0911 => AverageRmsVoltageMeasurementPeriodPhaseB,
            0x0912 => AverageRmsOverVoltageCounterPhaseB,
            0x0913 => AverageRmsUnderVoltageCounterPhaseB,
            0x0914 => RmsExtremeOverVoltagePeriodPhaseB,
            0x0915 => RmsExtremeUnderVoltagePeriodPhaseB,
            0x0916 => RmsVoltageSagPeriodPhaseB,
            0x0917 => RmsVoltageSwellPeriodPhaseB,
            0x0A01 => LineCurrentPhaseC,
            0x0A02 => ActiveCurrentPhaseC,
            0x0A03 => ReactiveCurrentPhaseC,
            0x0A05 => RmsVoltagePhaseC,
            0x0A06 => RmsVoltageMinPhaseC,
            0x0A07 => RmsVoltageMaxPhaseC,
            0x0A08 => RmsCurrentPhaseC,
            0x0A09 => RmsCurrentMinPhaseC,
            0x0A0A => RmsCurrentMaxPhaseC,
            0x0A0B => ActivePowerPhaseC,
            0x0A0C => ActivePowerMinPhaseC,
            0x0A0D => ActivePowerMaxPhaseC,
            0x0A0E => ReactivePowerPhaseC,
            0x0A0F => ApparentPowerPhaseC,
            0x0A10 => PowerFactorPhaseC,
            0x0A11 => AverageRmsVoltageMeasurementPeriodPhaseC,
            0x0A12 => AverageRmsOverVoltageCounterPhaseC,
            0x0A13 => AverageRmsUnderVoltageCounterPhaseC,
            0x0A14 => RmsExtremeOverVoltagePeriodPhaseC,
            0x0A15 => RmsExtremeUnderVoltagePeriodPhaseC,
            0x0A16 => RmsVoltageSagPeriodPhaseC,
            0x0A17 => RmsVoltageSwellPeriodPhaseC,
        }
        events {}
        commands {
            0x00 => GetProfileInfoCommand,
            0x01 => GetMeasurementProfileCommand,
        }
    }
}
